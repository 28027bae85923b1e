//! Page requests and paginated results.

use crate::model::api::PageDto;

pub const DEFAULT_PAGE_NUMBER: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 25;
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Normalized paging parameters with a 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Builds a request from optional query values.
    ///
    /// Missing or zero page numbers become 1; missing or zero sizes become 25;
    /// sizes above 1000 are capped.
    pub fn new(page_number: Option<u64>, page_size: Option<u64>) -> Self {
        let page_number = match page_number {
            Some(n) if n > 0 => n,
            _ => DEFAULT_PAGE_NUMBER,
        };
        let page_size = match page_size {
            Some(s) if s > 0 => s.min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };

        Self {
            page_number,
            page_size,
        }
    }

    /// 0-based page index for the ORM paginator.
    pub fn index(&self) -> u64 {
        self.page_number - 1
    }

    /// Number of items preceding this page.
    pub fn offset(&self) -> usize {
        (self.index() * self.page_size) as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of domain models together with the total match count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// Slices an already filtered and ordered collection into the requested page.
    pub fn from_sorted(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.page_size as usize)
            .collect();

        Self::new(items, total, request)
    }

    pub fn total_pages(&self) -> u64 {
        if self.request.page_size > 0 {
            (self.total as f64 / self.request.page_size as f64).ceil() as u64
        } else {
            0
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }

    /// Converts to the wire page, mapping every item with `f`.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        let total_pages = self.total_pages();

        PageDto {
            content: self.items.into_iter().map(f).collect(),
            total_elements: self.total,
            total_pages,
            number: self.request.index(),
            size: self.request.page_size,
        }
    }
}
