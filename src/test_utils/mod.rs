pub mod assertions;
pub mod helpers;
