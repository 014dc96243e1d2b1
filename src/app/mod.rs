// Adapters around the form: where events come from and how views are shown.

pub mod events;
pub mod render;
