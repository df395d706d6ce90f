pub mod toast;
pub mod trips_on_users_detail;
pub mod trips_on_userses_cell;
pub mod trips_on_userses_list;
