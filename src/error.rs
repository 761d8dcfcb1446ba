use thiserror::Error;

/// The error type for the batch operations [`HashSet::add`] and [`HashSet::remove`].
///
/// A failed batch leaves the set exactly as it was before the call.
///
/// [`HashSet::add`]: crate::HashSet::add
/// [`HashSet::remove`]: crate::HashSet::remove
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetError<T> {
    /// The batch was empty.
    #[error("no values provided")]
    NoValues,

    /// Some of the values to remove were not in the set.
    ///
    /// Holds every value of the batch that was missing, in the order it was given.
    #[error("{} value(s) not present in the set", .0.len())]
    NotFound(Vec<T>),
}

impl<T> SetError<T> {
    /// Returns the values that were not found, or an empty `Vec` for [`SetError::NoValues`].
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::from([1, 2]);
    /// let err = set.remove(&[2, 3, 4]).unwrap_err();
    /// assert_eq!(err.into_missing(), vec![3, 4]);
    /// // the batch failed, so 2 is still there
    /// assert!(set.contains(&2));
    /// ```
    pub fn into_missing(self) -> Vec<T> {
        match self {
            SetError::NoValues => Vec::new(),
            SetError::NotFound(missing) => missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(SetError::<u8>::NoValues.to_string(), "no values provided");
        assert_eq!(
            SetError::NotFound(vec!["a", "b"]).to_string(),
            "2 value(s) not present in the set"
        );
    }

    #[test]
    fn into_missing() {
        assert!(SetError::<u8>::NoValues.into_missing().is_empty());
        assert_eq!(SetError::NotFound(vec![7]).into_missing(), vec![7]);
    }

    #[test]
    fn is_std_error() {
        fn check<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        check(SetError::<String>::NoValues);
    }
}
