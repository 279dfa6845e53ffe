// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side database operations.

pub mod campaign;
pub mod facts;
pub mod guides;
pub mod hunters;
pub mod permits;
pub mod users;
