pub mod bottom_nav;
pub mod card;
pub mod chat_area;
pub mod help_widget;
pub mod input_bar;
