use libc::{c_char, c_double, c_int, c_uint, c_void};

use crate::types::*;

#[link(name = "geos_c")]
extern "C" {
    pub fn initGEOS(notice_function: GEOSMessageHandler, error_function: GEOSMessageHandler);
    pub fn finishGEOS();
    /// Version string of the linked library.
    pub fn GEOSversion() -> *const c_char;

    pub fn GEOSGeom_clone(g: *const GEOSGeometry) -> *mut GEOSGeometry;
    pub fn GEOSGeom_destroy(g: *mut GEOSGeometry);
    pub fn GEOSFree(buffer: *mut c_void);

    pub fn GEOSCoordSeq_create(size: c_uint, dims: c_uint) -> *mut GEOSCoordSequence;
    pub fn GEOSCoordSeq_getXY_r(
        handle: GEOSContextHandle_t,
        s: *const GEOSCoordSequence,
        idx: c_uint,
        x: *mut c_double,
        y: *mut c_double,
    ) -> c_int;
    pub fn GEOSCoordSeq_copyFromBuffer(
        buf: *const c_double,
        size: c_uint,
        hasZ: c_int,
        hasM: c_int,
    ) -> *mut GEOSCoordSequence;

    pub fn GEOSGeom_createCollection(
        type_: c_int,
        geoms: *mut *mut GEOSGeometry,
        ngeoms: c_uint,
    ) -> *mut GEOSGeometry;
    pub fn GEOSPolygonize(geoms: *const *const GEOSGeometry, ngeoms: c_uint) -> *mut GEOSGeometry;

    // pub fn GEOSCommentedOut(g: *const GEOSGeometry) -> c_int;

    pub fn GEOSHasZ(g: *const GEOSGeometry) -> c_char;
    pub fn GEOSProject(g: *const GEOSGeometry, p: *const GEOSGeometry) -> c_double;
    pub fn GEOSGeomType(g: *const GEOSGeometry) -> *mut c_char;
}
