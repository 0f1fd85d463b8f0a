use serde::{Deserialize, Serialize};

use crate::db::DatabaseError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(PeriodGranularity {
    Daily => "daily",
    Monthly => "monthly",
    Yearly => "yearly",
});

impl PeriodGranularity {
    /// SQL grouping expression over the fact-table day column.
    ///
    /// Day columns are ISO strings, so the daily expression is the column
    /// itself and the truncations are prefix substrings — all three sort
    /// chronologically under ORDER BY.
    pub fn group_expr(&self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Monthly => "strftime('%Y-%m', day)",
            Self::Yearly => "strftime('%Y', day)",
        }
    }
}

impl Default for PeriodGranularity {
    fn default() -> Self {
        Self::Daily
    }
}

str_enum!(VisitType {
    First => "first",
    Repeat => "repeat",
});

impl VisitType {
    /// Integer flag as stored in outpatient_daily.visit_type.
    pub fn as_flag(&self) -> i64 {
        match self {
            Self::First => 0,
            Self::Repeat => 1,
        }
    }

    pub fn from_flag(flag: i64) -> Result<Self, DatabaseError> {
        match flag {
            0 => Ok(Self::First),
            1 => Ok(Self::Repeat),
            _ => Err(DatabaseError::InvalidEnum {
                field: "visit_type".into(),
                value: flag.to_string(),
            }),
        }
    }
}

/// Department selector for chart requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentSelector {
    /// All departments summed into a single series.
    Total,
    /// Every displayed department as its own series.
    PerDepartment,
    /// One department, matched by exact name.
    Named(String),
}

impl DepartmentSelector {
    /// Any string other than the two sentinels is a department name;
    /// unknown names later resolve to an empty series, not an error.
    pub fn parse(s: &str) -> Self {
        match s {
            "all" => Self::Total,
            "by-department" => Self::PerDepartment,
            other => Self::Named(other.to_string()),
        }
    }
}

impl Default for DepartmentSelector {
    fn default() -> Self {
        Self::Total
    }
}
