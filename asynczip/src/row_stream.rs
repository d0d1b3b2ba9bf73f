// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};

use asynczip_core::Row;
use futures::{stream, Stream};

use crate::zip::ZipHandle;

/// A started aggregation viewed as a [`Stream`] of rows.
///
/// Created by [`ZipHandle::into_stream`]. The stream terminates when every
/// source is exhausted, and dropping it cancels all outstanding fetches just
/// like dropping the handle would.
pub struct RowStream<T> {
    inner: Pin<Box<dyn Stream<Item = Row<T>> + Send>>,
}

impl<T: Send + 'static> RowStream<T> {
    pub(crate) fn new(handle: ZipHandle<T>) -> Self {
        let inner = Box::pin(stream::unfold(handle, |mut handle| async move {
            handle.next_row().await.map(|row| (row, handle))
        }));
        Self { inner }
    }
}

impl<T> Stream for RowStream<T> {
    type Item = Row<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
