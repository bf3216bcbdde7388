pub mod ask;
pub mod context;
pub mod init;
pub mod serve;
pub mod status;
