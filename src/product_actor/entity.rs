use crate::actor_framework::Entity;
use crate::domain::Product;

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}
