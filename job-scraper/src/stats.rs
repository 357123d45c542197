/// Salary statistics for one programming language on one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub language: String,
    /// total reported by the source, not counted locally
    pub vacancies_found: u32,
    /// vacancies that produced a salary estimate
    pub vacancies_processed: u32,
    pub average_salary: u64,
}

/// Running count and sum of salary estimates
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SalaryAccumulator {
    processed: u32,
    sum: f64,
}

impl SalaryAccumulator {
    pub fn push(&mut self, estimate: Option<f64>) {
        if let Some(salary) = estimate {
            self.processed += 1;
            self.sum += salary;
        }
    }

    pub fn processed(&self) -> u32 {
        self.processed
    }

    /// Truncated mean, 0 when nothing was processed
    pub fn average(&self) -> u64 {
        if self.processed == 0 {
            return 0;
        }
        (self.sum / f64::from(self.processed)) as u64
    }

    pub fn finish(self, language: &str, vacancies_found: u32) -> LanguageStats {
        LanguageStats {
            language: language.to_owned(),
            vacancies_found,
            vacancies_processed: self.processed,
            average_salary: self.average(),
        }
    }
}

impl Extend<Option<f64>> for SalaryAccumulator {
    fn extend<I: IntoIterator<Item = Option<f64>>>(&mut self, iter: I) {
        iter.into_iter().for_each(|estimate| self.push(estimate));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_average_without_estimates_is_zero() {
        let mut acc = SalaryAccumulator::default();
        acc.extend([None, None]);
        let stats = acc.finish("Rust", 10);
        assert_eq!(stats.vacancies_found, 10);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
    }

    #[test]
    fn test_average_is_truncated() {
        let mut acc = SalaryAccumulator::default();
        acc.extend([Some(100.0), None, Some(101.0), Some(101.0)]);
        assert_eq!(acc.processed(), 3);
        // 302 / 3 = 100.66..
        assert_eq!(acc.average(), 100);
    }
}
