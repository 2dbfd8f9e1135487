pub mod text_layout;
