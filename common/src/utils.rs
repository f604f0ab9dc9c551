pub mod ordered_set;
