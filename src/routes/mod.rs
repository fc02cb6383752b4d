pub mod automotor_routes;
