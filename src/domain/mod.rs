// Domain layer: theme, catalog and site content. Leaf data with no I/O.

pub mod catalog;
pub mod icon;
pub mod model;

pub use icon::Icon;
pub use model::{
    AccentColor, AppTheme, Appearance, Brand, ColorRole, Contact, Radius, ServiceCatalog,
    ServiceDescriptor, Theme, CATALOG_SIZE,
};
