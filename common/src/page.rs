use serde_json::Value;

/// One decoded page of the job-search API, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResponse {
    body: Value,
}

impl PageResponse {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Raw job objects; empty when `results` is missing or not a list.
    pub fn results(&self) -> &[Value] {
        self.body
            .get("results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Declared page count, at least 1.
    ///
    /// Accepts an integer, a float (truncated) or a numeric string. Missing or
    /// non-numeric values count as a single page.
    pub fn total_pages(&self) -> u32 {
        let pages = match self.body.get("total_pages") {
            Some(Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().and_then(truncate)),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<u64>().ok().or_else(|| s.parse::<f64>().ok().and_then(truncate))
            }
            _ => None,
        };

        pages
            .filter(|&p| p >= 1)
            .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
            .unwrap_or(1)
    }
}

fn truncate(f: f64) -> Option<u64> {
    (f.is_finite() && f >= 0.0).then(|| f.trunc() as u64)
}

impl From<Value> for PageResponse {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}
