pub mod sim_vis2d;
