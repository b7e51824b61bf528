// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;

const PAGE_LEN: usize = 512;
const PAGE_MASK: i64 = PAGE_LEN as i64 - 1;

type Page = [i64; PAGE_LEN];

static BLANK: Page = [0; PAGE_LEN];

fn is_blank(page: &Page) -> bool {
    page == &BLANK
}

macro_rules! page_offset {
    ($addr: expr) => {{
        #[allow(clippy::cast_sign_loss, reason = "masked down to 0..512")]
        {
            ($addr & PAGE_MASK) as usize
        }
    }};
}

/// Sparse, zero-initialised memory split into fixed-size pages, keyed by the address of
/// their first cell. Pages are only allocated once something writes into them.
pub(super) struct PagedMemory {
    pages: HashMap<i64, Box<Page>>,
}

impl PagedMemory {
    fn page(&self, base: i64) -> &Page {
        self.pages.get(&base).map_or(&BLANK, |p| &**p)
    }

    /// bases of every page holding at least one non-zero cell, in ascending order
    fn live_pages(&self) -> impl Iterator<Item = i64> + '_ {
        self.pages
            .iter()
            .filter(|(_, page)| !is_blank(page))
            .map(|(&base, _)| base)
            .sorted_unstable()
    }

    /// Copy memory out into a dense vector, from address 0 up to the end of the last
    /// non-zero page.
    pub(super) fn to_dense(&self) -> Vec<i64> {
        let Some(last) = self.live_pages().filter(|&base| base >= 0).max() else {
            return Vec::new();
        };
        (0..=last)
            .step_by(PAGE_LEN)
            .flat_map(|base| self.page(base).iter().copied())
            .collect()
    }
}

impl FromIterator<i64> for PagedMemory {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut pages = HashMap::new();
        let mut base = 0;
        let mut page = Box::new(BLANK);
        let mut offset = 0;
        for value in iter {
            page[offset] = value;
            offset += 1;
            if offset == PAGE_LEN {
                pages.insert(base, std::mem::replace(&mut page, Box::new(BLANK)));
                base += PAGE_MASK + 1;
                offset = 0;
            }
        }
        if offset > 0 {
            pages.insert(base, page);
        }
        Self { pages }
    }
}

impl std::ops::Index<i64> for PagedMemory {
    type Output = i64;

    fn index(&self, addr: i64) -> &i64 {
        &self.page(addr & !PAGE_MASK)[page_offset!(addr)]
    }
}

impl std::ops::IndexMut<i64> for PagedMemory {
    fn index_mut(&mut self, addr: i64) -> &mut i64 {
        &mut self
            .pages
            .entry(addr & !PAGE_MASK)
            .or_insert_with(|| Box::new(BLANK))[page_offset!(addr)]
    }
}

impl Clone for PagedMemory {
    fn clone(&self) -> Self {
        // blank pages read the same as missing ones, so leave them behind
        let pages = self
            .pages
            .iter()
            .filter(|(_, page)| !is_blank(page))
            .map(|(&base, page)| (base, page.clone()))
            .collect();
        Self { pages }
    }
}

impl PartialEq for PagedMemory {
    fn eq(&self, other: &Self) -> bool {
        self.live_pages().eq(other.live_pages())
            && self
                .live_pages()
                .all(|base| self.page(base) == other.page(base))
    }
}

impl fmt::Debug for PagedMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for base in self.live_pages() {
            map.entry(
                &format_args!("page 0x{base:04x}"),
                &format_args!("{:?}", self.page(base)),
            );
        }
        map.finish()
    }
}
