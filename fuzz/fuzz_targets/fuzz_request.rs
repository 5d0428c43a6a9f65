#![no_main]

use crop_advisor::{analysis::Advisor, io::read_request_from_bytes, reference::ReferenceData};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let reference = ReferenceData::builtin();
    if let Ok(request) = read_request_from_bytes(data) {
        if let Ok(report) = Advisor::new(&reference).report(&request) {
            let p = &report.yield_prediction;
            assert!((50..=95).contains(&p.confidence_percent));
            assert!(report.fertilizer.urea.kg_per_hectare >= 0.0);
        }
    }
});
