pub mod output_command;
pub mod send_recv;
