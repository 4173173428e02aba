/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::{fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer};
use serde_with::SerializeDisplay;

use crate::{Error, Result};

/// A prometheus duration, as used for the `for` field of alerting rules
/// (e.g. `5m`, `1h30m`, `250ms`). Deserializes from a string, or from the
/// bare integer `0` as yaml hands it over unquoted.
#[derive(SerializeDisplay, PartialEq, Eq, Clone, Debug)]
pub struct RuleDuration(Vec<(u64, TimeUnit)>);

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
enum TimeUnit {
    Years,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Millis,
}

impl TimeUnit {
    fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Years => "y",
            TimeUnit::Weeks => "w",
            TimeUnit::Days => "d",
            TimeUnit::Hours => "h",
            TimeUnit::Minutes => "m",
            TimeUnit::Seconds => "s",
            TimeUnit::Millis => "ms",
        }
    }

    #[cfg(test)]
    fn millis(self) -> u64 {
        match self {
            TimeUnit::Years => 365 * 24 * 3600 * 1000,
            TimeUnit::Weeks => 7 * 24 * 3600 * 1000,
            TimeUnit::Days => 24 * 3600 * 1000,
            TimeUnit::Hours => 3600 * 1000,
            TimeUnit::Minutes => 60 * 1000,
            TimeUnit::Seconds => 1000,
            TimeUnit::Millis => 1,
        }
    }
}

impl RuleDuration {
    #[cfg(test)]
    fn millis(&self) -> u64 {
        self.0
            .iter()
            .map(|(n, unit)| n.saturating_mul(unit.millis()))
            .fold(0, u64::saturating_add)
    }

    fn parse(s: &str) -> Result<Self> {
        use nom::{
            bytes::complete::tag,
            character::complete::{char, digit1},
            combinator::{eof, map_res, not, opt, value},
            sequence::{pair, terminated, tuple},
            Finish, IResult,
        };

        fn unit<'a>(unit: TimeUnit) -> impl FnMut(&'a str) -> IResult<&'a str, TimeUnit> {
            move |input| match unit {
                // "m" must not swallow the prefix of "ms"
                TimeUnit::Minutes => value(unit, terminated(tag("m"), not(char('s'))))(input),
                _ => value(unit, tag(unit.suffix()))(input),
            }
        }

        fn component<'a>(
            u: TimeUnit,
        ) -> impl FnMut(&'a str) -> IResult<&'a str, Option<(u64, TimeUnit)>> {
            opt(pair(map_res(digit1, u64::from_str), unit(u)))
        }

        if s == "0" {
            return Ok(Self(Vec::new()));
        }

        let parser = tuple((
            component(TimeUnit::Years),
            component(TimeUnit::Weeks),
            component(TimeUnit::Days),
            component(TimeUnit::Hours),
            component(TimeUnit::Minutes),
            component(TimeUnit::Seconds),
            component(TimeUnit::Millis),
        ));

        match terminated(parser, eof)(s).finish() {
            Ok((_, (y, w, d, h, m, sec, ms))) => {
                let parts = [y, w, d, h, m, sec, ms]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>();
                if parts.is_empty() {
                    Err(Error::InvalidDuration(s.to_string()))
                } else {
                    Ok(Self(parts))
                }
            }
            Err(_) => Err(Error::InvalidDuration(s.to_string())),
        }
    }
}

impl Display for RuleDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "0s");
        }
        self.0
            .iter()
            .try_for_each(|(n, unit)| write!(f, "{n}{}", unit.suffix()))
    }
}

impl<'de> Deserialize<'de> for RuleDuration {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = RuleDuration;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a prometheus duration")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                RuleDuration::from_str(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
                match v {
                    0 => Ok(RuleDuration(Vec::new())),
                    _ => Err(E::custom(Error::InvalidDuration(v.to_string()))),
                }
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
                match v {
                    0 => Ok(RuleDuration(Vec::new())),
                    _ => Err(E::custom(Error::InvalidDuration(v.to_string()))),
                }
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

impl FromStr for RuleDuration {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
