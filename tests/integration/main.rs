mod cli_run;
mod config_loading;
mod input_loading;
