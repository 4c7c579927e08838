pub mod alias;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod prefix;
pub mod time;
