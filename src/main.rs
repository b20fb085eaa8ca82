use tracing::{info, warn, Instrument};

use product_catalog::app_system::{setup_tracing, CatalogConfig, CatalogSystem};
use product_catalog::domain::ProductList;

const SAMPLE_LISTING: &str = r#"{
    "total": 3,
    "items": [
        {
            "id": "854cef69-976d-4c2a-a18c-2aa45046c390",
            "title": "Frontend Backpack",
            "description": "Everything you need to ship the next release",
            "image": "/5_Dots.svg",
            "category": "soft-skill",
            "price": 750
        },
        {
            "id": "c101ab44-ed99-4a54-990d-47aa2bb4e7d9",
            "title": "Pixel Cap",
            "description": "Keeps the sun off while you debug outdoors",
            "image": "/Shell.svg",
            "category": "other",
            "price": 1450
        },
        {
            "id": "b06cde61-912f-4663-9751-09956c0eed67",
            "title": "Priceless Mascot",
            "description": "Not for sale",
            "image": "/Asterisk_2.svg",
            "category": "other",
            "price": null
        }
    ]
}"#;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting product catalog");

    let config = CatalogConfig::from_env().map_err(|e| e.to_string())?;
    let system = CatalogSystem::new(config).map_err(|e| e.to_string())?;

    let listing = ProductList::from_json(SAMPLE_LISTING).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("catalog_load");
    let count = async {
        info!("Loading product listing");
        system.catalog_client.load_listing(listing).await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(count, "Catalog ready");

    let span = tracing::info_span!("preview_selection");
    async {
        for id in ["c101ab44-ed99-4a54-990d-47aa2bb4e7d9", "no-such-product"] {
            match system.catalog_client.select_preview(id).await {
                Ok(Some(product)) => info!(product_id = %product.id, price = ?product.price, "Previewing product"),
                Ok(None) => warn!(product_id = %id, "Product not in catalog"),
                Err(e) => return Err(e.to_string()),
            }
        }
        Ok(())
    }
    .instrument(span)
    .await?;

    let preview = system.catalog_client.get_preview().await.map_err(|e| e.to_string())?;
    if let Some(product) = preview {
        info!(product_title = %product.title, "Current preview");
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
