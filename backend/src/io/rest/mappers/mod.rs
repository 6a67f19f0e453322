pub mod goal_mapper;
