//! Serialization of prices.
//!
//! Prices are whole currency units held as `f64`. A price with no fractional
//! part is written as a JSON integer (`40000`, not `40000.0`); anything else is
//! written as a float. Use with `#[serde(serialize_with = "...")]`.

use serde::Serializer;

// Above this, f64 no longer represents every integer exactly.
const MAX_EXACT_WHOLE: f64 = 9_007_199_254_740_992.0;

pub fn serialize<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() <= MAX_EXACT_WHOLE {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Priced {
        #[serde(serialize_with = "super::serialize")]
        price: f64,
    }

    fn json(price: f64) -> String {
        serde_json::to_string(&Priced { price }).unwrap()
    }

    #[test]
    fn whole_prices_have_no_fraction() {
        assert_eq!(json(40000.0), r#"{"price":40000}"#);
        assert_eq!(json(0.0), r#"{"price":0}"#);
        assert_eq!(json(-3.0), r#"{"price":-3}"#);
    }

    #[test]
    fn fractional_prices_stay_floats() {
        assert_eq!(json(12.5), r#"{"price":12.5}"#);
        assert_eq!(json(68571.43), r#"{"price":68571.43}"#);
    }

    #[test]
    fn huge_and_non_finite_prices_fall_back_to_float() {
        assert_eq!(json(1e300), r#"{"price":1e300}"#);
        // serde_json writes non-finite floats as null.
        assert_eq!(json(f64::NAN), r#"{"price":null}"#);
        assert_eq!(json(f64::INFINITY), r#"{"price":null}"#);
    }
}
