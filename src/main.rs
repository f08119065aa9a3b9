use ts_wp_init::{
    cli::{get_args, get_log_level_from_verbose, run},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    let lvl = get_log_level_from_verbose(args.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
