pub mod cities;
pub mod districts;
pub mod product_packages;
pub mod states;

pub use cities::Entity as Cities;
pub use cities::Model as City;
pub use districts::Entity as Districts;
pub use districts::Model as District;
pub use product_packages::Entity as ProductPackages;
pub use product_packages::Model as ProductPackage;
pub use states::Entity as States;
pub use states::Model as State;
