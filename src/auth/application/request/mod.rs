pub mod ticket_request;
