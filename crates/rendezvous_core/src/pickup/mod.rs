pub mod best_pickup;
