pub mod pipeline;
pub mod recorded_assignment;
pub mod routing_assignment;
pub mod routing_index_manager;
pub mod solver_adapter;
