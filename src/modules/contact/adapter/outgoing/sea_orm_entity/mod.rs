pub mod contact_info;
