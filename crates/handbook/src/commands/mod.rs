pub mod build;
pub mod changelog;
pub mod dev;
pub mod init;
pub mod serve;
