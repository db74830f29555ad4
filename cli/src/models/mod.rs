pub mod smtp_args;
