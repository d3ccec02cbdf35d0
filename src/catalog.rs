//! Lazy, handle-addressable view over a DWG file.
//!
//! Where [`crate::io::dwg::DwgReader::read`] eagerly walks the whole object
//! graph into a [`crate::document::CadDocument`], [`Catalog`] opens just
//! enough of the file to resolve any handle on demand: the section locator,
//! the object map, and the class table. Payloads are decoded the first time
//! a caller asks for them and cached from then on.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::classes::DxfClassCollection;
use crate::document::HeaderVariables;
use crate::entities::{Dimension, Entity, EntityType};
use crate::error::{DxfError, Result};
use crate::io::dwg::{
    CadTemplate, DwgFileHeader, DwgHeaderHandlesCollection, DwgObjectReader, DwgObjectType,
    DwgOpenResult, DwgReader, DwgReaderConfiguration,
};
use crate::notification::{Notification, NotificationCollection, NotificationType};
use crate::preview::DwgPreview;
use crate::summary_info::CadSummaryInfo;
use crate::types::{DxfVersion, Vector3};

// ---------------------------------------------------------------------------
// Handle decode lifecycle
// ---------------------------------------------------------------------------

/// Where a handle sits in its one-way decode lifecycle.
///
/// Transitions only ever move downward through this list; a `*Bad` state is
/// terminal. `query`/`decode` never resurrect a handle out of a bad state —
/// a caller that wants to retry has to reopen the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum HandleState {
    /// Never looked at.
    Unseen,
    /// Object-map offset resolved and the MS/RS header read; payload not
    /// decoded yet.
    HeaderRead,
    /// Payload decoded into a [`CadTemplate`] but not yet promoted to the
    /// entity cache (an internal resting point; `decode` never leaves a
    /// handle here once it returns).
    PayloadDecoded,
    /// Fully decoded and cached; repeat lookups are free.
    Cached,
    /// The object header (MS size / RS type-code) could not be read.
    HeaderBad(String),
    /// The header was readable but the payload failed to decode.
    PayloadBad(String),
}

/// The result of [`Catalog::decode`]: either a fully-typed entity, or an
/// opaque record for a type this crate has no decoder for.
#[derive(Debug, Clone)]
pub enum EntityRecord {
    /// A type this crate knows how to decode.
    Known(EntityType),
    /// A recognized-but-undecoded object: its class/type name and the raw
    /// bytes of its payload (header through the end of the object, CRC
    /// excluded).
    Unknown { type_name: String, raw: Vec<u8> },
}

impl EntityRecord {
    /// The type name this record would report to `query`'s type filter.
    pub fn type_name(&self) -> &str {
        match self {
            EntityRecord::Known(e) => e.as_entity().entity_type(),
            EntityRecord::Unknown { type_name, .. } => type_name,
        }
    }
}

// ---------------------------------------------------------------------------
// Raw tuple projections (§6)
// ---------------------------------------------------------------------------

/// One entry of the section locator table, named or page-based depending on
/// file version.
#[derive(Debug, Clone)]
pub struct SectionLocatorEntry {
    pub name: String,
    pub offset: i64,
    pub size: i64,
}

/// One entry of the object header index, built eagerly at open time for
/// every handle in the object map.
#[derive(Debug, Clone)]
pub struct ObjectHeader {
    pub handle: u64,
    pub offset: i64,
    pub size: u32,
    pub type_code: i16,
    pub type_name: Option<String>,
    pub is_entity: Option<bool>,
}

/// The raw, undecoded bytes of one object's payload.
#[derive(Debug, Clone)]
pub struct RawObjectRecord {
    pub handle: u64,
    pub offset: i64,
    pub size: u32,
    pub type_code: i16,
    pub bytes: Vec<u8>,
}

/// `(color_index, true_color, layer_handle)` resolved for one entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityStyle {
    pub handle: u64,
    pub color_index: Option<u16>,
    pub true_color: Option<(u8, u8, u8)>,
    pub layer_handle: u64,
}

/// `(color_index, true_color)` for one LAYER object.
#[derive(Debug, Clone, Copy)]
pub struct LayerColor {
    pub handle: u64,
    pub color_index: u16,
    pub true_color: Option<(u8, u8, u8)>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A lazily-decoded, handle-addressable view over one open DWG file.
///
/// Holds the whole `AcDb:AcDbObjects` byte buffer plus the indices built at
/// open time (section locator, object map, class table). Everything else —
/// decoded entity payloads, the layer color index — is built on first
/// access and cached in `RefCell`-guarded maps, consistent with the
/// single-threaded, publish-once caching model this crate uses throughout
/// (see [`crate::document::CadDocument`]'s own notification side channel).
pub struct Catalog {
    version: DxfVersion,
    file_header: DwgFileHeader,
    header: HeaderVariables,
    header_handles: DwgHeaderHandlesCollection,
    classes: DxfClassCollection,
    summary_info: Option<CadSummaryInfo>,
    preview: Option<DwgPreview>,

    /// Handles in object-map order. The object map is read into a
    /// `HashMap`, which has no stable iteration order of its own; ascending
    /// handle order is the nearest deterministic substitute, and DWG
    /// handles are assigned in increasing creation order in practice.
    ordered_handles: Vec<u64>,
    handle_offsets: HashMap<u64, i64>,

    header_index: RefCell<HashMap<u64, ObjectHeader>>,
    entity_cache: RefCell<HashMap<u64, EntityRecord>>,
    handle_state: RefCell<HashMap<u64, HandleState>>,
    layer_index: RefCell<Option<HashMap<u64, LayerColor>>>,

    reader: RefCell<DwgObjectReader>,

    /// Diagnostic side channel: record-local failures (malformed/unsupported
    /// objects) and best-effort-read notices (missing summary/preview) are
    /// recorded here rather than surfaced as errors.
    pub notifications: RefCell<NotificationCollection>,
}

impl Catalog {
    /// Open a DWG file by path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(DxfError::Io)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Open a DWG file from any seekable byte stream.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let open_result = DwgReader::from_reader(reader)?
            .with_config(DwgReaderConfiguration::default())
            .open_index()?;
        Self::from_open_result(open_result)
    }

    fn from_open_result(open: DwgOpenResult) -> Result<Self> {
        let DwgOpenResult {
            version,
            file_header,
            header,
            header_handles,
            classes,
            handle_map,
            objects_data,
            summary_info,
            preview,
            notifications,
        } = open;

        let mut ordered_handles: Vec<u64> = handle_map.keys().copied().collect();
        ordered_handles.sort_unstable();

        let class_entries: Vec<_> = classes.iter().cloned().collect();
        let reader = DwgObjectReader::new(
            version,
            objects_data,
            std::collections::VecDeque::new(),
            handle_map.clone(),
            &class_entries,
        );

        let mut notif = NotificationCollection::new();
        for n in notifications {
            notif.push(n);
        }

        Ok(Self {
            version,
            file_header,
            header,
            header_handles,
            classes,
            summary_info,
            preview,
            ordered_handles,
            handle_offsets: handle_map,
            header_index: RefCell::new(HashMap::new()),
            entity_cache: RefCell::new(HashMap::new()),
            handle_state: RefCell::new(HashMap::new()),
            layer_index: RefCell::new(None),
            reader: RefCell::new(reader),
            notifications: RefCell::new(notif),
        })
    }

    /// The file's DWG version.
    pub fn version(&self) -> DxfVersion {
        self.version
    }

    /// Best-effort document metadata (title, author, ...). `None` if the
    /// `AcDb:SummaryInfo` section was absent or malformed; opening never
    /// fails because of it.
    pub fn summary_info(&self) -> Option<&CadSummaryInfo> {
        self.summary_info.as_ref()
    }

    /// Best-effort thumbnail preview. `None` if the `AcDb:Preview` section
    /// was absent or malformed.
    pub fn preview(&self) -> Option<&DwgPreview> {
        self.preview.as_ref()
    }

    /// Decoded `$`-prefixed header system variables.
    pub fn header(&self) -> &HeaderVariables {
        &self.header
    }

    /// The DXF class table, resolving type-codes at or above the fixed-type
    /// fence to symbolic names.
    pub fn classes(&self) -> &DxfClassCollection {
        &self.classes
    }

    /// Borrow the diagnostic side channel: record-local decode failures and
    /// best-effort-read notices accumulated so far.
    pub fn diagnostics(&self) -> std::cell::Ref<'_, NotificationCollection> {
        self.notifications.borrow()
    }

    fn notify(&self, notification_type: NotificationType, message: impl Into<String>) {
        self.notifications.borrow_mut().notify(notification_type, message);
    }

    fn notify_handle(
        &self,
        notification_type: NotificationType,
        handle: u64,
        offset: Option<i64>,
        type_code: Option<i16>,
        reason: impl Into<String>,
    ) {
        self.notifications
            .borrow_mut()
            .push(Notification::for_handle(notification_type, handle, offset, type_code, reason));
    }

    // -----------------------------------------------------------------
    // Object header index (§4.4 — built eagerly, cached lazily per-handle)
    // -----------------------------------------------------------------

    /// Resolve (and cache) the object header for `handle`.
    fn header_for(&self, handle: u64) -> Result<ObjectHeader> {
        if let Some(h) = self.header_index.borrow().get(&handle) {
            return Ok(h.clone());
        }

        let offset = *self
            .handle_offsets
            .get(&handle)
            .ok_or(DxfError::UnknownHandle(handle))?;

        let peek = self.reader.borrow_mut().peek_header(offset);
        let header = match peek {
            Ok((obj_type, raw_type, size)) => {
                self.handle_state.borrow_mut().insert(handle, HandleState::HeaderRead);
                let (type_name, is_entity) = self.resolve_type_name(obj_type, raw_type);
                ObjectHeader {
                    handle,
                    offset,
                    size,
                    type_code: raw_type,
                    type_name,
                    is_entity,
                }
            }
            Err(e) => {
                self.handle_state
                    .borrow_mut()
                    .insert(handle, HandleState::HeaderBad(e.to_string()));
                return Err(e);
            }
        };

        self.header_index.borrow_mut().insert(handle, header.clone());
        Ok(header)
    }

    fn resolve_type_name(&self, obj_type: DwgObjectType, raw_type: i16) -> (Option<String>, Option<bool>) {
        if obj_type == DwgObjectType::Unlisted {
            if let Some(class) = self.classes.by_number(raw_type) {
                return (Some(class.dxf_name.clone()), Some(class.is_an_entity));
            }
            return (None, None);
        }
        (Some(fixed_type_name(obj_type).to_string()), Some(is_fixed_entity_type(obj_type)))
    }

    // -----------------------------------------------------------------
    // read_object / decode (§4.8)
    // -----------------------------------------------------------------

    /// The raw, undecoded bytes of one object's payload. Fails with
    /// `UNKNOWN_HANDLE` if the handle has no entry in the object map.
    pub fn read_object(&self, handle: u64) -> Result<RawObjectRecord> {
        let offset = *self
            .handle_offsets
            .get(&handle)
            .ok_or(DxfError::UnknownHandle(handle))?;
        let header = self.header_for(handle)?;

        let data = &self.reader.borrow().data_ref();
        let start = offset as usize;
        let end = (start + header.size as usize).min(data.len());
        let bytes = if start <= end && start <= data.len() {
            data[start..end].to_vec()
        } else {
            Vec::new()
        };

        Ok(RawObjectRecord {
            handle,
            offset,
            size: header.size,
            type_code: header.type_code,
            bytes,
        })
    }

    /// Read the object header and decode its payload template, routing any
    /// payload failure into `handle_state`/the notification channel the same
    /// way for every caller (`decode`, `handle_refs`).
    fn decode_template(&self, handle: u64) -> Result<(ObjectHeader, CadTemplate)> {
        let header = self.header_for(handle)?;

        let decoded = self.reader.borrow_mut().decode_single(handle, header.offset);
        match decoded {
            Ok(Some(t)) => Ok((header, t)),
            Ok(None) => {
                let type_name = header.type_name.clone().unwrap_or_else(|| "UNKNOWN".into());
                Err(DxfError::UnsupportedType { handle, type_name })
            }
            Err(e) => {
                self.handle_state
                    .borrow_mut()
                    .insert(handle, HandleState::PayloadBad(e.to_string()));
                log::warn!(
                    "handle {handle:#X} (type {:?} @ offset {}): payload decode failed: {e}",
                    header.type_code,
                    header.offset
                );
                self.notify_handle(
                    NotificationType::Error,
                    handle,
                    Some(header.offset),
                    Some(header.type_code),
                    e.to_string(),
                );
                Err(e)
            }
        }
    }

    /// Decode an object's payload into an [`EntityRecord`], caching the
    /// result. Fails with `UNSUPPORTED_TYPE` if this crate has no decoder
    /// for the object's type, and `MALFORMED_RECORD` if decoding the bytes
    /// failed.
    pub fn decode(&self, handle: u64) -> Result<EntityRecord> {
        if let Some(cached) = self.entity_cache.borrow().get(&handle) {
            return Ok(cached.clone());
        }
        if let Some(HandleState::HeaderBad(reason) | HandleState::PayloadBad(reason)) =
            self.handle_state.borrow().get(&handle)
        {
            return Err(DxfError::MalformedRecord {
                handle,
                reason: reason.clone(),
            });
        }

        let (header, template) = self.decode_template(handle)?;

        let record = match template.entity() {
            Some(entity) => EntityRecord::Known(entity.clone()),
            None => EntityRecord::Unknown {
                type_name: header.type_name.clone().unwrap_or_else(|| "UNKNOWN".into()),
                raw: self.read_object(handle).map(|r| r.bytes).unwrap_or_default(),
            },
        };

        self.entity_cache.borrow_mut().insert(handle, record.clone());
        self.handle_state.borrow_mut().insert(handle, HandleState::Cached);
        Ok(record)
    }

    /// An object's ordered handle-reference stream (§3 "Handle reference
    /// stream"): owner, reactors, xdictionary and, for entities, the
    /// layer/linetype/material/plotstyle/color cross-references, plus any
    /// type-specific handles (table entries, block contents, dictionary
    /// entries). Absent references (encoded as handle `0`) are omitted.
    ///
    /// Unlike `decode`, this does not populate the entity cache — callers
    /// wanting both the entity and its references should call `decode`
    /// separately.
    pub fn handle_refs(&self, handle: u64) -> Result<(u64, Vec<u64>)> {
        let (_header, template) = self.decode_template(handle)?;
        let refs = template.all_handles().into_iter().filter(|&h| h != 0).collect();
        Ok((handle, refs))
    }

    /// A lazy sequence of decoded entity records, in object-map order.
    ///
    /// `types`, if given, is a set of type-names to include; `None` means
    /// all types this crate can decode. Handles whose decode fails
    /// (record-local error) are skipped — recorded via [`Catalog::notifications`]
    /// rather than surfacing as an error from `query` itself.
    pub fn query<'a>(
        &'a self,
        types: Option<&'a [&'a str]>,
    ) -> impl Iterator<Item = (u64, EntityRecord)> + 'a {
        self.ordered_handles.iter().copied().filter_map(move |handle| {
            let record = match self.decode(handle) {
                Ok(r) => r,
                Err(e) => {
                    log::debug!("query skipped handle {handle:#X}: {e}");
                    self.notify_handle(
                        NotificationType::Warning,
                        handle,
                        self.handle_offsets.get(&handle).copied(),
                        None,
                        format!("query skipped handle {handle:#X}: {e}"),
                    );
                    return None;
                }
            };
            if let Some(filter) = types {
                if !filter.iter().any(|t| t.eq_ignore_ascii_case(record.type_name())) {
                    return None;
                }
            }
            Some((handle, record))
        })
    }

    // -----------------------------------------------------------------
    // to_points (§4.8)
    // -----------------------------------------------------------------

    /// Project an entity record onto its ordered list of 3D points, per the
    /// fixed per-type rule. Types with no projection rule fail with
    /// `NO_POINT_PROJECTION`.
    pub fn to_points(&self, entity: &EntityRecord) -> Result<Vec<Vector3>> {
        let known = match entity {
            EntityRecord::Known(e) => e,
            EntityRecord::Unknown { type_name, .. } => {
                return Err(DxfError::NoPointProjection(type_name.clone()));
            }
        };

        match known {
            EntityType::Line(l) => Ok(vec![l.start, l.end]),
            EntityType::LwPolyline(p) => Ok(p
                .vertices
                .iter()
                .map(|v| Vector3::new(v.location.x, v.location.y, 0.0))
                .collect()),
            EntityType::Point(p) => Ok(vec![p.location]),
            EntityType::Text(t) => Ok(vec![t.insertion_point]),
            EntityType::MText(t) => Ok(vec![t.insertion_point]),
            EntityType::Dimension(d) => Ok(dimension_points(d)),
            EntityType::Ray(r) => Ok(vec![r.base_point, r.base_point + r.direction]),
            EntityType::XLine(x) => Ok(vec![x.base_point - x.direction, x.base_point + x.direction]),
            other => Err(DxfError::NoPointProjection(other.as_entity().entity_type().to_string())),
        }
    }

    // -----------------------------------------------------------------
    // Style resolver (§4.7)
    // -----------------------------------------------------------------

    /// Resolve an entity's layer cross-reference to `(color_index,
    /// true_color, layer_handle)`. Missing layer yields `layer_handle = 0`
    /// and the entity's own color.
    pub fn style_for(&self, handle: u64) -> Result<EntityStyle> {
        let record = self.decode(handle)?;
        let known = match &record {
            EntityRecord::Known(e) => e,
            EntityRecord::Unknown { type_name, .. } => {
                return Err(DxfError::UnsupportedType {
                    handle,
                    type_name: type_name.clone(),
                });
            }
        };
        let entity = known.as_entity();
        let color = entity.color();

        let layer_handle = self.entity_layer_handle(handle);
        let layer_index = self.ensure_layer_index();
        let layer_color = layer_handle.and_then(|h| layer_index.get(&h).copied());

        let (color_index, true_color) = match layer_color {
            Some(lc) => (Some(lc.color_index), lc.true_color),
            None => (color.index(), color.rgb()),
        };

        Ok(EntityStyle {
            handle,
            color_index,
            true_color,
            layer_handle: layer_handle.unwrap_or(0),
        })
    }

    fn entity_layer_handle(&self, handle: u64) -> Option<u64> {
        let offset = *self.handle_offsets.get(&handle)?;
        let template = self.reader.borrow_mut().decode_single(handle, offset).ok().flatten()?;
        template.layer_handle().filter(|&h| h != 0)
    }

    fn ensure_layer_index(&self) -> HashMap<u64, LayerColor> {
        if let Some(existing) = self.layer_index.borrow().as_ref() {
            return existing.clone();
        }

        let mut index = HashMap::new();
        for &handle in &self.ordered_handles {
            let offset = match self.handle_offsets.get(&handle) {
                Some(&o) => o,
                None => continue,
            };
            let template = match self.reader.borrow_mut().decode_single(handle, offset) {
                Ok(Some(t)) => t,
                _ => continue,
            };
            if let CadTemplate::LayerEntry { common, layer_data } = template {
                index.insert(
                    common.handle,
                    LayerColor {
                        handle: common.handle,
                        color_index: layer_data.color.index().unwrap_or(7),
                        true_color: layer_data.color.rgb(),
                    },
                );
            }
        }

        *self.layer_index.borrow_mut() = Some(index.clone());
        index
    }

    // -----------------------------------------------------------------
    // Raw tuple projections (§6)
    // -----------------------------------------------------------------

    /// `(name, offset, size)` for every named/located section.
    pub fn section_locators(&self, limit: Option<usize>) -> Vec<SectionLocatorEntry> {
        let mut out = Vec::new();
        match &self.file_header {
            DwgFileHeader::AC15(h) => {
                use crate::io::dwg::constants::section_names;
                const NAMES: &[&str] = &[
                    section_names::HEADER,
                    section_names::CLASSES,
                    section_names::HANDLES,
                    section_names::OBJ_FREE_SPACE,
                    section_names::TEMPLATE,
                    section_names::AUX_HEADER,
                ];
                for name in NAMES {
                    if let Some(idx) = section_names::get_section_locator_by_name(name) {
                        if let Some(rec) = h.records.get(&idx) {
                            out.push(SectionLocatorEntry {
                                name: name.to_string(),
                                offset: rec.seeker,
                                size: rec.size,
                            });
                        }
                    }
                }
            }
            DwgFileHeader::AC18(h) => {
                for desc in h.descriptors.values() {
                    let offset = desc
                        .local_sections
                        .first()
                        .map(|p| p.seeker as i64)
                        .unwrap_or(0);
                    out.push(SectionLocatorEntry {
                        name: desc.name.clone(),
                        offset,
                        size: desc.decompressed_size as i64,
                    });
                }
            }
            DwgFileHeader::AC21(h) => {
                for desc in h.base.descriptors.values() {
                    let offset = desc
                        .local_sections
                        .first()
                        .map(|p| p.seeker as i64)
                        .unwrap_or(0);
                    out.push(SectionLocatorEntry {
                        name: desc.name.clone(),
                        offset,
                        size: desc.decompressed_size as i64,
                    });
                }
            }
        }
        apply_limit(out, limit)
    }

    /// `(handle, offset)` for the whole object map, in object-map order.
    pub fn object_map(&self, limit: Option<usize>) -> Vec<(u64, i64)> {
        let v: Vec<_> = self
            .ordered_handles
            .iter()
            .map(|&h| (h, self.handle_offsets[&h]))
            .collect();
        apply_limit(v, limit)
    }

    /// `(handle, offset, size, type-code [, type-name, class])` for every
    /// handle in the object map.
    pub fn object_headers(&self, limit: Option<usize>) -> Vec<ObjectHeader> {
        let mut out = Vec::new();
        for &handle in &self.ordered_handles {
            if let Some(max) = limit {
                if out.len() >= max {
                    break;
                }
            }
            if let Ok(h) = self.header_for(handle) {
                out.push(h);
            }
        }
        out
    }

    /// `(handle, offset, size, type-code, bytes)` for every handle.
    pub fn object_records(&self, limit: Option<usize>) -> Vec<RawObjectRecord> {
        let mut out = Vec::new();
        for &handle in &self.ordered_handles {
            if let Some(max) = limit {
                if out.len() >= max {
                    break;
                }
            }
            if let Ok(r) = self.read_object(handle) {
                out.push(r);
            }
        }
        out
    }

    /// `(handle, color_index, true_color?)` for every decoded LAYER object.
    pub fn layer_colors(&self, limit: Option<usize>) -> Vec<LayerColor> {
        let index = self.ensure_layer_index();
        let mut out: Vec<_> = index.into_values().collect();
        out.sort_unstable_by_key(|lc| lc.handle);
        apply_limit(out, limit)
    }

    /// `(handle, color-index?, true-color?, layer-handle)` for every
    /// successfully decoded entity.
    pub fn entity_styles(&self, limit: Option<usize>) -> Vec<EntityStyle> {
        let mut out = Vec::new();
        for &handle in &self.ordered_handles {
            if let Some(max) = limit {
                if out.len() >= max {
                    break;
                }
            }
            if let Ok(style) = self.style_for(handle) {
                out.push(style);
            }
        }
        out
    }

    /// `(handle, sx, sy, sz, ex, ey, ez)` for every LINE.
    pub fn lines(&self, limit: Option<usize>) -> Vec<(u64, f64, f64, f64, f64, f64, f64)> {
        self.typed_tuples(limit, |e| match e {
            EntityType::Line(l) => {
                Some((l.start.x, l.start.y, l.start.z, l.end.x, l.end.y, l.end.z))
            }
            _ => None,
        })
        .into_iter()
        .map(|(h, (sx, sy, sz, ex, ey, ez))| (h, sx, sy, sz, ex, ey, ez))
        .collect()
    }

    /// `(handle, cx, cy, cz, r, start-rad, end-rad)` for every ARC.
    pub fn arcs(&self, limit: Option<usize>) -> Vec<(u64, f64, f64, f64, f64, f64, f64)> {
        self.typed_tuples(limit, |e| match e {
            EntityType::Arc(a) => Some((
                a.center.x,
                a.center.y,
                a.center.z,
                a.radius,
                a.start_angle,
                a.end_angle,
            )),
            _ => None,
        })
        .into_iter()
        .map(|(h, (cx, cy, cz, r, s, en))| (h, cx, cy, cz, r, s, en))
        .collect()
    }

    /// `(handle, cx, cy, cz, r)` for every CIRCLE.
    pub fn circles(&self, limit: Option<usize>) -> Vec<(u64, f64, f64, f64, f64)> {
        self.typed_tuples(limit, |e| match e {
            EntityType::Circle(c) => Some((c.center.x, c.center.y, c.center.z, c.radius)),
            _ => None,
        })
        .into_iter()
        .map(|(h, (cx, cy, cz, r))| (h, cx, cy, cz, r))
        .collect()
    }

    /// `(handle, x, y, z, thickness)` for every POINT.
    pub fn points(&self, limit: Option<usize>) -> Vec<(u64, f64, f64, f64, f64)> {
        self.typed_tuples(limit, |e| match e {
            EntityType::Point(p) => {
                Some((p.location.x, p.location.y, p.location.z, p.thickness))
            }
            _ => None,
        })
        .into_iter()
        .map(|(h, (x, y, z, t))| (h, x, y, z, t))
        .collect()
    }

    /// `(handle, flags, [(x,y)…], [bulge…], [(sw,ew)…], const-width?)` for
    /// every LWPOLYLINE.
    #[allow(clippy::type_complexity)]
    pub fn lw_polylines(
        &self,
        limit: Option<usize>,
    ) -> Vec<(u64, u32, Vec<(f64, f64)>, Vec<f64>, Vec<(f64, f64)>, Option<f64>)> {
        self.typed_tuples(limit, |e| match e {
            EntityType::LwPolyline(p) => {
                let flags = if p.is_closed { 1u32 } else { 0 };
                let xy = p.vertices.iter().map(|v| (v.location.x, v.location.y)).collect();
                let bulges = p.vertices.iter().map(|v| v.bulge).collect();
                let widths = p.vertices.iter().map(|v| (v.start_width, v.end_width)).collect();
                let const_width = if p.constant_width != 0.0 {
                    Some(p.constant_width)
                } else {
                    None
                };
                Some((flags, xy, bulges, widths, const_width))
            }
            _ => None,
        })
        .into_iter()
        .map(|(h, (flags, xy, bulges, widths, cw))| (h, flags, xy, bulges, widths, cw))
        .collect()
    }

    /// `(handle, x, y, z, xs, ys, zs, rot, block-name?)` for every INSERT.
    #[allow(clippy::type_complexity)]
    pub fn inserts(
        &self,
        limit: Option<usize>,
    ) -> Vec<(u64, f64, f64, f64, f64, f64, f64, f64, Option<String>)> {
        self.typed_tuples(limit, |e| match e {
            EntityType::Insert(i) => Some((
                i.insert_point.x,
                i.insert_point.y,
                i.insert_point.z,
                i.x_scale,
                i.y_scale,
                i.z_scale,
                i.rotation,
                if i.block_name.is_empty() {
                    None
                } else {
                    Some(i.block_name.clone())
                },
            )),
            _ => None,
        })
        .into_iter()
        .map(|(h, (x, y, z, xs, ys, zs, rot, name))| (h, x, y, z, xs, ys, zs, rot, name))
        .collect()
    }

    /// Decode every handle in object-map order, keeping those for which
    /// `project` returns `Some`, up to `limit` results.
    fn typed_tuples<T>(&self, limit: Option<usize>, project: impl Fn(&EntityType) -> Option<T>) -> Vec<(u64, T)> {
        let mut out = Vec::new();
        for &handle in &self.ordered_handles {
            if let Some(max) = limit {
                if out.len() >= max {
                    break;
                }
            }
            let record = match self.decode(handle) {
                Ok(r) => r,
                Err(_) => continue,
            };
            if let EntityRecord::Known(entity) = &record {
                if let Some(tuple) = project(entity) {
                    out.push((handle, tuple));
                }
            }
        }
        out
    }
}

fn apply_limit<T>(mut v: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(n) = limit {
        v.truncate(n);
    }
    v
}

/// DIMENSION → `[defpoint2, defpoint3]` when the variant exposes both
/// definition points, else `[text_midpoint]`.
fn dimension_points(d: &Dimension) -> Vec<Vector3> {
    match d {
        Dimension::Aligned(a) => vec![a.first_point, a.second_point],
        Dimension::Linear(l) => vec![l.first_point, l.second_point],
        _ => vec![d.base().text_middle_point],
    }
}

fn fixed_type_name(t: DwgObjectType) -> &'static str {
    use DwgObjectType::*;
    match t {
        Text => "TEXT",
        Attrib => "ATTRIB",
        Attdef => "ATTDEF",
        Block => "BLOCK",
        Endblk => "ENDBLK",
        Seqend => "SEQEND",
        Insert => "INSERT",
        Minsert => "MINSERT",
        Vertex2D => "VERTEX",
        Vertex3D => "VERTEX",
        VertexMesh => "VERTEX",
        VertexPface => "VERTEX",
        VertexPfaceFace => "VERTEX",
        Polyline2D => "POLYLINE",
        Polyline3D => "POLYLINE",
        Arc => "ARC",
        Circle => "CIRCLE",
        Line => "LINE",
        DimensionOrdinate | DimensionLinear | DimensionAligned | DimensionAng3Pt
        | DimensionAng2Ln | DimensionRadius | DimensionDiameter => "DIMENSION",
        Point => "POINT",
        Face3D => "3DFACE",
        PolylinePface => "POLYLINE",
        PolylineMesh => "POLYLINE",
        Solid => "SOLID",
        Trace => "TRACE",
        Shape => "SHAPE",
        Viewport => "VIEWPORT",
        Ellipse => "ELLIPSE",
        Spline => "SPLINE",
        Region => "REGION",
        Solid3D => "3DSOLID",
        Body => "BODY",
        Ray => "RAY",
        Xline => "XLINE",
        Dictionary => "DICTIONARY",
        OleFrame => "OLEFRAME",
        Mtext => "MTEXT",
        Leader => "LEADER",
        Tolerance => "TOLERANCE",
        Mline => "MLINE",
        Layer => "LAYER",
        Style => "STYLE",
        Ltype => "LTYPE",
        View => "VIEW",
        Ucs => "UCS",
        Vport => "VPORT",
        Appid => "APPID",
        Dimstyle => "DIMSTYLE",
        VpEntHdr => "VP_ENT_HDR",
        Group => "GROUP",
        MlineStyle => "MLINESTYLE",
        Ole2Frame => "OLE2FRAME",
        LwPolyline => "LWPOLYLINE",
        Hatch => "HATCH",
        XRecord => "XRECORD",
        AcDbPlaceholder => "ACDBPLACEHOLDER",
        VbaProject => "VBA_PROJECT",
        Layout => "LAYOUT",
        AcadProxyEntity => "ACAD_PROXY_ENTITY",
        AcadProxyObject => "ACAD_PROXY_OBJECT",
        _ => "UNKNOWN",
    }
}

fn is_fixed_entity_type(t: DwgObjectType) -> bool {
    use DwgObjectType::*;
    matches!(
        t,
        Text | Attrib
            | Attdef
            | Block
            | Endblk
            | Seqend
            | Insert
            | Minsert
            | Vertex2D
            | Vertex3D
            | VertexMesh
            | VertexPface
            | VertexPfaceFace
            | Polyline2D
            | Polyline3D
            | Arc
            | Circle
            | Line
            | DimensionOrdinate
            | DimensionLinear
            | DimensionAligned
            | DimensionAng3Pt
            | DimensionAng2Ln
            | DimensionRadius
            | DimensionDiameter
            | Point
            | Face3D
            | PolylinePface
            | PolylineMesh
            | Solid
            | Trace
            | Shape
            | Viewport
            | Ellipse
            | Spline
            | Region
            | Solid3D
            | Body
            | Ray
            | Xline
            | OleFrame
            | Mtext
            | Leader
            | Tolerance
            | Mline
            | Ole2Frame
            | LwPolyline
            | Hatch
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::dimension::{Dimension, DimensionAligned, DimensionLinear, DimensionRadius};
    use crate::entities::Line;

    #[test]
    fn apply_limit_truncates() {
        let v = vec![1, 2, 3, 4, 5];
        assert_eq!(apply_limit(v.clone(), Some(3)), vec![1, 2, 3]);
        assert_eq!(apply_limit(v.clone(), Some(0)), Vec::<i32>::new());
        assert_eq!(apply_limit(v, None), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn apply_limit_past_end_is_a_no_op() {
        let v = vec![1, 2, 3];
        assert_eq!(apply_limit(v, Some(10)), vec![1, 2, 3]);
    }

    #[test]
    fn dimension_points_aligned_uses_both_definition_points() {
        let d = Dimension::Aligned(DimensionAligned::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(3.0, 4.0, 0.0),
        ));
        assert_eq!(
            dimension_points(&d),
            vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(3.0, 4.0, 0.0)]
        );
    }

    #[test]
    fn dimension_points_linear_uses_both_definition_points() {
        let d = Dimension::Linear(DimensionLinear::new(
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(2.0, 1.0, 0.0),
        ));
        assert_eq!(
            dimension_points(&d),
            vec![Vector3::new(1.0, 1.0, 0.0), Vector3::new(2.0, 1.0, 0.0)]
        );
    }

    #[test]
    fn dimension_points_falls_back_to_text_midpoint() {
        let mut radius = DimensionRadius::default();
        radius.base.text_middle_point = Vector3::new(5.0, 6.0, 7.0);
        let d = Dimension::Radius(radius);
        assert_eq!(dimension_points(&d), vec![Vector3::new(5.0, 6.0, 7.0)]);
    }

    #[test]
    fn fixed_type_name_covers_the_geometric_codes() {
        assert_eq!(fixed_type_name(DwgObjectType::Line), "LINE");
        assert_eq!(fixed_type_name(DwgObjectType::Circle), "CIRCLE");
        assert_eq!(fixed_type_name(DwgObjectType::DimensionLinear), "DIMENSION");
        assert_eq!(fixed_type_name(DwgObjectType::Vertex2D), "VERTEX");
    }

    #[test]
    fn fixed_type_name_unrecognized_code_is_unknown() {
        assert_eq!(fixed_type_name(DwgObjectType::Dummy), "UNKNOWN");
    }

    #[test]
    fn is_fixed_entity_type_matches_fence() {
        assert!(is_fixed_entity_type(DwgObjectType::Line));
        assert!(is_fixed_entity_type(DwgObjectType::Hatch));
        assert!(!is_fixed_entity_type(DwgObjectType::Dummy));
    }

    #[test]
    fn entity_record_type_name_known_delegates_to_entity() {
        let line = Line::from_coords(0.0, 0.0, 0.0, 1.0, 1.0, 0.0);
        let record = EntityRecord::Known(EntityType::Line(line));
        assert_eq!(record.type_name(), "LINE");
    }

    #[test]
    fn entity_record_type_name_unknown_uses_recorded_name() {
        let record = EntityRecord::Unknown {
            type_name: "ACAD_PROXY_ENTITY".to_string(),
            raw: vec![1, 2, 3],
        };
        assert_eq!(record.type_name(), "ACAD_PROXY_ENTITY");
    }

    #[test]
    fn handle_state_bad_states_are_distinguishable() {
        let header_bad = HandleState::HeaderBad("truncated".into());
        let payload_bad = HandleState::PayloadBad("truncated".into());
        assert_ne!(header_bad, payload_bad);
        assert_eq!(HandleState::Unseen, HandleState::Unseen);
    }
}
