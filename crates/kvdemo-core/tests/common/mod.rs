pub mod resp_server;
