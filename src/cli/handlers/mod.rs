pub mod decode;
pub mod see;
pub mod serve;
