pub mod alias;
pub mod conf;
pub mod matching;
pub mod prefix;
pub mod time;
