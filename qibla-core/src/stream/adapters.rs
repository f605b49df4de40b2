//! Stream adapters from sensor samples to Qibla results
//!
//! Each adapter wraps an inner [`Stream`] and applies one of the pure
//! calculations to every item. They hold configuration only, never sample
//! history, so output for a sample depends on that sample alone.
//!
//! ```text
//! raw (lat, lon) ──RawFixStream──▶ Coordinate ──BearingStream──▶ DeclinationAdjustedBearing
//! accuracy (°)   ──AccuracyStream──▶ CompassAccuracyTier
//! ```
//!
//! `WouldBlock` from the inner stream passes straight through. Once the
//! inner stream reports `EndOfStream` the adapter keeps reporting it.

use crate::{
    accuracy::{CompassAccuracyClassifier, CompassAccuracyTier, HeadingAccuracySample},
    bearing::BearingCalculator,
    coordinate::Coordinate,
    declination::{DeclinationAdjustedBearing, DeclinationCorrector},
    errors::QiblaResult,
};

use super::{Stream, StreamError};

/// Validates raw `(latitude, longitude)` fixes into coordinates
///
/// An invalid fix is reported as `StreamError::Rejected` for that poll only;
/// the next poll continues with the next fix.
pub struct RawFixStream<S> {
    inner: S,
    finished: bool,
}

impl<S> RawFixStream<S> {
    /// Wrap a stream of raw fixes
    pub fn new(inner: S) -> Self {
        Self { inner, finished: false }
    }

    /// Unwrap the inner stream
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, E> Stream for RawFixStream<S>
where
    S: Stream<Item = (f64, f64), Error = StreamError<E>>,
{
    type Item = Coordinate;
    type Error = StreamError<E>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        if self.finished {
            return Err(nb::Error::Other(StreamError::EndOfStream));
        }

        let (latitude, longitude) = self.inner.poll_next().map_err(|e| {
            if matches!(e, nb::Error::Other(StreamError::EndOfStream)) {
                self.finished = true;
            }
            e
        })?;

        Coordinate::new(latitude, longitude)
            .map_err(|e| nb::Error::Other(StreamError::Rejected(e)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Turns validated coordinates into declination-adjusted Qibla bearings
pub struct BearingStream<S> {
    inner: S,
    calculator: BearingCalculator,
    corrector: DeclinationCorrector,
    declination_degrees: f64,
    finished: bool,
}

impl<S> BearingStream<S> {
    /// Bearings towards the Kaaba with zero declination
    pub fn new(inner: S) -> Self {
        Self::new_with_calculator(inner, BearingCalculator::default())
    }

    /// Bearings using a custom calculator (other target or radius)
    pub fn new_with_calculator(inner: S, calculator: BearingCalculator) -> Self {
        Self {
            inner,
            calculator,
            corrector: DeclinationCorrector::new(),
            declination_degrees: 0.0,
            finished: false,
        }
    }

    /// Apply a fixed magnetic declination to every bearing.
    ///
    /// Fails with `InvalidValue` for a non-finite declination.
    pub fn with_declination(mut self, declination_degrees: f64) -> QiblaResult<Self> {
        if !declination_degrees.is_finite() {
            return Err(crate::QiblaError::InvalidValue);
        }
        self.declination_degrees = declination_degrees;
        Ok(self)
    }

    /// Update the declination, e.g. after the location moved to a new region
    pub fn set_declination(&mut self, declination_degrees: f64) -> QiblaResult<()> {
        if !declination_degrees.is_finite() {
            return Err(crate::QiblaError::InvalidValue);
        }
        self.declination_degrees = declination_degrees;
        Ok(())
    }

    /// Declination currently applied
    pub fn declination_degrees(&self) -> f64 {
        self.declination_degrees
    }

    /// Unwrap the inner stream
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, E> Stream for BearingStream<S>
where
    S: Stream<Item = Coordinate, Error = StreamError<E>>,
{
    type Item = DeclinationAdjustedBearing;
    type Error = StreamError<E>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        if self.finished {
            return Err(nb::Error::Other(StreamError::EndOfStream));
        }

        let observer = self.inner.poll_next().map_err(|e| {
            if matches!(e, nb::Error::Other(StreamError::EndOfStream)) {
                self.finished = true;
            }
            e
        })?;

        let bearing = self.calculator.calculate_bearing(&observer);
        self.corrector
            .apply_declination(&bearing, self.declination_degrees)
            .map_err(|e| nb::Error::Other(StreamError::Rejected(e)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Classifies heading-accuracy readings into tiers, one for one
pub struct AccuracyStream<S> {
    inner: S,
    classifier: CompassAccuracyClassifier,
    finished: bool,
}

impl<S> AccuracyStream<S> {
    /// Classify with the default cut points
    pub fn new(inner: S) -> Self {
        Self::new_with_classifier(inner, CompassAccuracyClassifier::default())
    }

    /// Classify with a custom classifier
    pub fn new_with_classifier(inner: S, classifier: CompassAccuracyClassifier) -> Self {
        Self {
            inner,
            classifier,
            finished: false,
        }
    }

    /// Unwrap the inner stream
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, E> Stream for AccuracyStream<S>
where
    S: Stream<Error = StreamError<E>>,
    S::Item: Into<HeadingAccuracySample>,
{
    type Item = CompassAccuracyTier;
    type Error = StreamError<E>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        if self.finished {
            return Err(nb::Error::Other(StreamError::EndOfStream));
        }

        let sample = self.inner.poll_next().map_err(|e| {
            if matches!(e, nb::Error::Other(StreamError::EndOfStream)) {
                self.finished = true;
            }
            e
        })?;

        Ok(self.classifier.classify(sample.into()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
