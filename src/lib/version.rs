pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    "U.S. National Fire Danger Rating System, daily indices (°F, mph, inches)"
);
