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

// Headers used by the Product Advertising API.
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_TARGET: &str = "x-amz-target";

pub const CONTENT_ENCODING_AMZ: &str = "amz-1.0";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";

// SearchItems operation.
pub const SEARCH_ITEMS_TARGET: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems";
pub const SEARCH_ITEMS_PATH: &str = "/paapi5/searchitems";

/// Service name bound into every credential scope.
pub const SERVICE: &str = "ProductAdvertisingAPI";

// Env values used to configure the client.
/// Env var holding the access key id.
pub const AMAZON_ACCESS_KEY: &str = "AMAZON_ACCESS_KEY";
/// Env var holding the secret access key.
pub const AMAZON_SECRET_KEY: &str = "AMAZON_SECRET_KEY";
/// Env var holding the partner (associate) tag.
pub const AMAZON_ASSOCIATE_TAG: &str = "AMAZON_ASSOCIATE_TAG";

// Defaults for the Japanese marketplace; all of them can be overridden on
// the client.
/// Default API host.
pub const DEFAULT_HOST: &str = "webservices.amazon.co.jp";
/// Default signing region for the default host.
pub const DEFAULT_REGION: &str = "us-west-2";
/// Default marketplace sent in the payload.
pub const DEFAULT_MARKETPLACE: &str = "www.amazon.co.jp";
