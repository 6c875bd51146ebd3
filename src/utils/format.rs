//! Feedback Template Rendering
//!
//! Templates use a small printf subset so the wording can live in the message
//! catalog: `%d`, `%s`, `%f`, `%.Nf` and `%%`. Non-finite numbers print as
//! `NaN`, `Inf` and `-Inf`. A specifier with no matching argument renders
//! empty.

/// Argument for [`render`]
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    Num(f64),
    Text(&'a str),
}

impl From<f64> for Arg<'_> {
    fn from(v: f64) -> Self {
        Arg::Num(v)
    }
}

impl From<usize> for Arg<'_> {
    fn from(v: usize) -> Self {
        Arg::Num(v as f64)
    }
}

impl From<u32> for Arg<'_> {
    fn from(v: u32) -> Self {
        Arg::Num(f64::from(v))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Text(v)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(v: &'a String) -> Self {
        Arg::Text(v.as_str())
    }
}

fn non_finite(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("NaN")
    } else if v == f64::INFINITY {
        Some("Inf")
    } else if v == f64::NEG_INFINITY {
        Some("-Inf")
    } else {
        None
    }
}

/// Shortest faithful rendering: integers without a fraction, otherwise the
/// shortest round-trip decimal
pub fn format_number(v: f64) -> String {
    if let Some(text) = non_finite(v) {
        return text.to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

fn format_fixed(v: f64, precision: usize) -> String {
    match non_finite(v) {
        Some(text) => text.to_string(),
        None => format!("{:.*}", precision, v),
    }
}

/// Render `template`, consuming `args` left to right
pub fn render(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();
    let mut next_arg = args.iter();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        // Optional precision
        let mut spec = String::from("%");
        let mut precision: Option<usize> = None;
        if chars.peek() == Some(&'.') {
            spec.push('.');
            chars.next();
            let mut digits = String::new();
            while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                digits.push(d);
                chars.next();
            }
            spec.push_str(&digits);
            precision = Some(digits.parse().unwrap_or(0));
        }

        let Some(conv) = chars.peek().copied().filter(|c| matches!(c, 'd' | 'i' | 'f' | 's')) else {
            out.push_str(&spec);
            continue;
        };
        chars.next();

        let Some(arg) = next_arg.next() else {
            continue;
        };

        let text = match (conv, arg) {
            (_, Arg::Text(s)) => s.to_string(),
            ('f', Arg::Num(v)) => format_fixed(*v, precision.unwrap_or(6)),
            (_, Arg::Num(v)) => format_number(*v),
        };
        out.push_str(&text);
    }

    out
}

/// Round to the nearest tenth
pub fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
