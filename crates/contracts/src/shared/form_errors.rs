use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Ошибка валидации одного поля контактной формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub value: String,
    pub error: String,
    /// ISO-8601 с миллисекундами, UTC
    pub timestamp: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        value: impl Into<String>,
        error: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            error: error.into(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Неудачная попытка отправки: номер (с единицы) и ошибки полей
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAttempt {
    pub attempt: usize,
    pub errors: Vec<FieldError>,
}

/// Журнал неудачных попыток отправки, только на добавление.
///
/// Сериализуется в JSON-массив попыток и кладётся в скрытое поле формы.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrorLog {
    attempts: Vec<SubmitAttempt>,
}

impl FormErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Записать попытку. Пустой список ошибок попыткой не считается.
    ///
    /// Возвращает номер записанной попытки.
    pub fn record_attempt(&mut self, errors: Vec<FieldError>) -> Option<usize> {
        if errors.is_empty() {
            return None;
        }
        let attempt = self.attempts.len() + 1;
        self.attempts.push(SubmitAttempt { attempt, errors });
        Some(attempt)
    }

    pub fn attempts(&self) -> &[SubmitAttempt] {
        &self.attempts
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_empty_log_serializes_to_empty_array() {
        assert_eq!(FormErrorLog::new().to_json(), "[]");
    }

    #[test]
    fn test_attempts_are_numbered_from_one() {
        let mut log = FormErrorLog::new();
        assert_eq!(log.record_attempt(vec![]), None);
        let first = log.record_attempt(vec![FieldError::new("email", "x", "Invalid email", at())]);
        let second = log.record_attempt(vec![FieldError::new("name", "", "Required", at())]);
        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));
        assert_eq!(log.attempts().len(), 2);
    }

    #[test]
    fn test_json_shape() {
        let mut log = FormErrorLog::new();
        log.record_attempt(vec![FieldError::new("message", "", "Required", at())]);
        let json: serde_json::Value = serde_json::from_str(&log.to_json()).unwrap();
        assert_eq!(json[0]["attempt"], 1);
        assert_eq!(json[0]["errors"][0]["field"], "message");
        assert_eq!(json[0]["errors"][0]["timestamp"], "2024-03-15T14:02:26.000Z");
    }
}
