// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use paapi_core::utils::Redact;
use paapi_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access key, secret key and partner tag.
///
/// All three are required: the first two feed the signature, the partner
/// tag is bound into every search payload.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id for the Product Advertising API.
    pub access_key_id: String,
    /// Secret access key for the Product Advertising API.
    pub secret_access_key: String,
    /// Partner (associate) tag attached to every search.
    pub partner_tag: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("partner_tag", &Redact::from(&self.partner_tag))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty()
            && !self.secret_access_key.is_empty()
            && !self.partner_tag.is_empty()
    }
}
