//! UI Components
//!
//! Login screen, navigation, and one view per resource.

mod coming_soon;
mod filament_types_view;
mod login_form;
mod nav_bar;
mod purchases_view;
mod warehouse_view;

pub use coming_soon::{ClientsView, OrdersView};
pub use filament_types_view::FilamentTypesView;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use purchases_view::PurchasesView;
pub use warehouse_view::WarehouseView;
