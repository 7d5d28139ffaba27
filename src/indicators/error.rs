use thiserror::Error;

/// Validation failures. Messages are Persian since they reach dashboard users.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("سری قیمت خالی است")]
    EmptySeries,

    #[error("قیمت نامعتبر {value} در اندیس {index}: باید متناهی و مثبت باشد")]
    InvalidPrice { index: usize, value: f64 },

    #[error("تلورانس PRZ نامعتبر {0}: باید متناهی و نامنفی باشد")]
    InvalidTolerance(f64),

    #[error("تعداد روز نامعتبر {requested}: باید بین 1 و {max} باشد")]
    InvalidDays { requested: usize, max: usize },
}
