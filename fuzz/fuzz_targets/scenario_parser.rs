#![no_main]

use filterbench::report::{Report, Scenario};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary TOML must never panic the parser or the report builder
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(scenario) = Scenario::from_toml_str(input) {
            let _ = Report::from_scenario(&scenario);
        }
    }
});
