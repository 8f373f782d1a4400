mod add_destination;
mod destination_detail;
mod destination_list;
mod login;
mod map;
