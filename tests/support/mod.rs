pub mod pointmap_env;
