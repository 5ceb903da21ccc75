use crate::error::Error;

pub const FINAL_QUERY: &str = concat!(
    "SELECT p.AMOUNT AS SALARY, ",
    "CONCAT(e.FIRST_NAME, ' ', e.LAST_NAME) AS NAME, ",
    "FLOOR(DATEDIFF(CURDATE(), e.DOB) / 365.25) AS AGE, ",
    "d.DEPARTMENT_NAME ",
    "FROM PAYMENTS p ",
    "JOIN EMPLOYEE e ON p.EMP_ID = e.EMP_ID ",
    "JOIN DEPARTMENT d ON e.DEPARTMENT = d.DEPARTMENT_ID ",
    "WHERE DAY(p.PAYMENT_TIME) != 1 ",
    "ORDER BY p.AMOUNT DESC ",
    "LIMIT 1",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// First code point of every run of ten decimal digits (`Nd`) in the Basic
/// Multilingual Plane. Each run counts 0 through 9.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10,
];

/// Parity of the number formed by the last two characters of `reg_no`.
///
/// The tail is read as a signed decimal integer: an optional `+` or `-`
/// followed by decimal digits from any script, so `"+1"`, `"-3"` and `"١٢"`
/// are all accepted.
pub fn parity(reg_no: &str) -> Result<Parity, Error> {
    let chars: Vec<char> = reg_no.chars().collect();
    if chars.len() < 2 {
        return Err(Error::Parse(format!(
            "Registration id '{reg_no}' is shorter than two characters"
        )));
    }

    let tail = &chars[chars.len() - 2..];
    let n = parse_int(tail).ok_or_else(|| {
        let tail: String = tail.iter().collect();
        Error::Parse(format!(
            "Registration id '{reg_no}' must end in a two character integer, found '{tail}'"
        ))
    })?;

    Ok(if n % 2 == 0 { Parity::Even } else { Parity::Odd })
}

fn parse_int(chars: &[char]) -> Option<i32> {
    let (negative, digits) = match chars.split_first()? {
        (&'-', rest) => (true, rest),
        (&'+', rest) => (false, rest),
        _ => (false, chars),
    };
    if digits.is_empty() {
        return None;
    }

    let n = digits
        .iter()
        .try_fold(0i32, |acc, &c| Some(acc * 10 + decimal_digit(c)? as i32))?;
    Some(if negative { -n } else { n })
}

fn decimal_digit(c: char) -> Option<u32> {
    let code = c as u32;
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|zero| code - zero)
}

/// The query assigned to each parity. Both currently share one question.
pub fn query_for(parity: Parity) -> &'static str {
    match parity {
        Parity::Even | Parity::Odd => FINAL_QUERY,
    }
}

pub fn select_query(reg_no: &str) -> Result<&'static str, Error> {
    let parity = parity(reg_no)?;
    tracing::debug!(?parity, "Selected question by registration id");
    Ok(query_for(parity))
}
