pub mod u100_smart_search;
