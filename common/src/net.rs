pub mod local;
pub mod prefix;
