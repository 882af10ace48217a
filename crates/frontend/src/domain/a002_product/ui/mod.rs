pub mod add_form;

pub use add_form::AddProductForm;
