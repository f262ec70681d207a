// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transport-neutral form of the tracking message a node publishes alongside
//! each output: the output's header stamp plus the stamps of the inputs it was
//! derived from.
//!
//! Stamps are optional because the transport may leave them unset; turning a
//! tag into a [`PubInfo`] reports any missing one as `InvalidArgument`.

use pubtrace_core::{PubInfo, PubtraceError, Result, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    pub topic_name: String,
    pub header_stamp: Option<Timestamp>,
    pub pub_time: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputInfo {
    pub topic_name: String,
    pub header_stamp: Option<Timestamp>,
    pub sub_time: Option<Timestamp>,
}

/// One tracking message: an output and the inputs it was derived from.
///
/// ```
/// use pubtrace::MessageTrackingTag;
/// use pubtrace_core::Timestamp;
///
/// let ts = Timestamp::from_secs;
/// let tag = MessageTrackingTag::new("/planning/trajectory", ts(10))
///     .with_input("/perception/objects", ts(8), ts(9));
///
/// let info = tag.to_pub_info().unwrap().unwrap();
/// assert_eq!(info.topic(), "/planning/trajectory");
/// assert_eq!(info.input_time(), ts(8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTrackingTag {
    pub output_info: OutputInfo,
    pub input_infos: Vec<InputInfo>,
}

impl MessageTrackingTag {
    /// A tag for an output on `topic_name` stamped `header_stamp`, with no inputs yet.
    pub fn new(topic_name: impl Into<String>, header_stamp: Timestamp) -> Self {
        Self {
            output_info: OutputInfo {
                topic_name: topic_name.into(),
                header_stamp: Some(header_stamp),
                pub_time: None,
            },
            input_infos: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pub_time(mut self, pub_time: Timestamp) -> Self {
        self.output_info.pub_time = Some(pub_time);
        self
    }

    /// Adds an input stamped `header_stamp` that the node observed at `sub_time`.
    #[must_use]
    pub fn with_input(
        mut self,
        topic_name: impl Into<String>,
        header_stamp: Timestamp,
        sub_time: Timestamp,
    ) -> Self {
        self.input_infos.push(InputInfo {
            topic_name: topic_name.into(),
            header_stamp: Some(header_stamp),
            sub_time: Some(sub_time),
        });
        self
    }

    pub fn topic_name(&self) -> &str {
        &self.output_info.topic_name
    }

    /// The record this tag contributes to the store.
    ///
    /// Among several inputs the one with the earliest header stamp is used, so
    /// the stored latency is the worst case over the output's causes. A tag
    /// without inputs yields `Ok(None)`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the output or any input lacks a stamp, or
    /// if the output topic is empty.
    pub fn to_pub_info(&self) -> Result<Option<PubInfo>> {
        let topic = &self.output_info.topic_name;
        let output_time = self.output_info.header_stamp.ok_or_else(|| {
            PubtraceError::invalid_argument(format!("output on '{topic}' has no header stamp"))
        })?;

        let mut earliest: Option<(Timestamp, Timestamp)> = None;
        for input in &self.input_infos {
            let missing = |field: &str| {
                PubtraceError::invalid_argument(format!(
                    "input '{}' of '{topic}' has no {field}",
                    input.topic_name
                ))
            };
            let header_stamp = input.header_stamp.ok_or_else(|| missing("header stamp"))?;
            let sub_time = input.sub_time.ok_or_else(|| missing("sub time"))?;

            if earliest.map_or(true, |(stamp, _)| header_stamp < stamp) {
                earliest = Some((header_stamp, sub_time));
            }
        }

        let Some((input_time, subscribe_time)) = earliest else {
            return Ok(None);
        };

        PubInfo::builder(topic.as_str())
            .input_time(input_time)
            .subscribe_time(subscribe_time)
            .output_time(output_time)
            .build()
            .map(Some)
    }

    /// Multi-line dump of the tag as observed at `sub_time` on `path_name`.
    ///
    /// ```text
    /// === 12.500000000 [/planning/trajectory] in planning_path: 10.000000000 ===
    ///    (sub) [/perception/objects] 8.000000000
    /// ```
    pub fn dump(&self, path_name: &str, sub_time: Timestamp) -> String {
        let mut out = format!(
            "=== {} [{}] in {}: {} ===",
            sub_time,
            self.output_info.topic_name,
            path_name,
            stamp_label(self.output_info.header_stamp)
        );
        for input in &self.input_infos {
            out.push_str(&format!(
                "\n   (sub) [{}] {}",
                input.topic_name,
                stamp_label(input.header_stamp)
            ));
        }
        out
    }
}

fn stamp_label(stamp: Option<Timestamp>) -> String {
    stamp.map_or_else(|| "<unset>".to_string(), |t| t.to_string())
}
