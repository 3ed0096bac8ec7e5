pub mod enums;
pub mod member_view;
