pub mod road;
pub mod segment;
