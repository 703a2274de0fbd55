//! 目录视图的内存变换
//!
//! 所有分页都在客户端完成：数据一次性取回，"ver más" 只是多展示一页。

use std::collections::HashMap;

use crate::collate;
use crate::{DEFAULT_ESPECIALIDAD_DESCRIPCION, Doctor, Especialidad};

// =========================================================
// 分页器 (Paginator)
// =========================================================

/// 追加式分页：`pagina_actual` 为 0 时展示第一页，每次前进多展示一页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    pagina_actual: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pagina_actual: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn pagina_actual(&self) -> usize {
        self.pagina_actual
    }

    fn shown_limit(&self) -> usize {
        self.pagina_actual
            .saturating_add(1)
            .saturating_mul(self.page_size)
    }

    /// 当前应展示的条目数
    pub fn visible_count(&self, total: usize) -> usize {
        self.shown_limit().min(total)
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count(items.len())]
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.shown_limit() < total
    }

    /// 前进一页；已全部展示时不做任何事
    pub fn advance(&mut self, total: usize) -> bool {
        if self.has_more(total) {
            self.pagina_actual += 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.pagina_actual = 0;
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(crate::DEFAULT_PAGE_SIZE)
    }
}

// =========================================================
// 按专科分组 (Especialidades con doctores)
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct EspecialidadConDoctores {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    pub doctores: Vec<Doctor>,
    pub expandida: bool,
    pub paginator: Paginator,
}

impl EspecialidadConDoctores {
    fn new(id: String, nombre: String, descripcion: String, page_size: usize) -> Self {
        Self {
            id,
            nombre,
            descripcion,
            doctores: Vec::new(),
            expandida: false,
            paginator: Paginator::new(page_size),
        }
    }

    /// 展开 / 收起；展开时重新计算可见页
    pub fn toggle(&mut self) {
        self.expandida = !self.expandida;
        if self.expandida {
            self.paginator.reset();
        }
    }

    /// 当前展示的医生（未展开时为空）
    pub fn mostrando_doctores(&self) -> &[Doctor] {
        if self.expandida {
            self.paginator.visible(&self.doctores)
        } else {
            &[]
        }
    }

    pub fn ver_mas_doctores(&mut self) -> bool {
        self.paginator.advance(self.doctores.len())
    }

    pub fn tiene_mas_doctores(&self) -> bool {
        self.paginator.has_more(self.doctores.len())
    }

    pub fn total_mostrados(&self) -> usize {
        self.paginator.visible_count(self.doctores.len())
    }
}

/// 将医生按专科 id 分组，并按专科名称（西班牙语排序）排列
///
/// 描述取自专科目录；目录中没有或为空时使用默认文案。
pub fn agrupar_por_especialidad(
    doctores: &[Doctor],
    especialidades: &[Especialidad],
    page_size: usize,
) -> Vec<EspecialidadConDoctores> {
    let info: HashMap<&str, &Especialidad> = especialidades
        .iter()
        .filter(|e| !e.id.is_empty())
        .map(|e| (e.id.as_str(), e))
        .collect();

    let mut grupos: HashMap<String, EspecialidadConDoctores> = HashMap::new();

    for doctor in doctores {
        let esp_id = doctor.especialidad.id.clone();
        let grupo = grupos.entry(esp_id.clone()).or_insert_with(|| {
            let catalogo = info.get(esp_id.as_str());
            let nombre = if doctor.especialidad.nombre.is_empty() {
                catalogo.map(|e| e.nombre.clone()).unwrap_or_default()
            } else {
                doctor.especialidad.nombre.clone()
            };
            let descripcion = catalogo
                .and_then(|e| e.descripcion.clone())
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ESPECIALIDAD_DESCRIPCION.to_string());
            EspecialidadConDoctores::new(esp_id, nombre, descripcion, page_size)
        });
        grupo.doctores.push(doctor.clone());
    }

    let mut result: Vec<_> = grupos.into_values().collect();
    result.sort_by(|a, b| collate::compare(&a.nombre, &b.nombre).then_with(|| a.id.cmp(&b.id)));
    result
}

// =========================================================
// 医生列表过滤 (Lista de doctores)
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    pub nombre: String,
    pub especialidad_id: String,
}

impl DoctorFilter {
    pub fn is_empty(&self) -> bool {
        self.nombre.trim().is_empty() && self.especialidad_id.is_empty()
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        let nombre = self.nombre.trim();
        (nombre.is_empty() || doctor.matches_nombre(nombre))
            && (self.especialidad_id.is_empty() || doctor.especialidad.id == self.especialidad_id)
    }
}

pub const MENSAJE_SIN_DOCTORES: &str = "No hay doctores disponibles en este momento.";
pub const MENSAJE_SIN_COINCIDENCIAS: &str =
    "No se encontraron doctores que coincidan con los criterios de búsqueda.";

/// 医生列表页状态：完整集合、过滤结果与分页游标
///
/// 每次过滤条件变化都从完整集合重新计算，并回到第一页。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorListState {
    doctores: Vec<Doctor>,
    filtrados: Vec<Doctor>,
    filter: DoctorFilter,
    paginator: Paginator,
}

impl DoctorListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            paginator: Paginator::new(page_size),
            ..Default::default()
        }
    }

    /// 替换完整集合（重新加载后）
    pub fn set_doctores(&mut self, doctores: Vec<Doctor>) {
        self.doctores = doctores;
        self.recompute();
    }

    pub fn set_busqueda(&mut self, nombre: impl Into<String>) {
        self.filter.nombre = nombre.into();
        self.recompute();
    }

    pub fn set_especialidad(&mut self, especialidad_id: impl Into<String>) {
        self.filter.especialidad_id = especialidad_id.into();
        self.recompute();
    }

    pub fn filter(&self) -> &DoctorFilter {
        &self.filter
    }

    fn recompute(&mut self) {
        self.filtrados = self
            .doctores
            .iter()
            .filter(|d| self.filter.matches(d))
            .cloned()
            .collect();
        self.paginator.reset();
    }

    pub fn displayed(&self) -> &[Doctor] {
        self.paginator.visible(&self.filtrados)
    }

    pub fn ver_mas(&mut self) -> bool {
        self.paginator.advance(self.filtrados.len())
    }

    pub fn tiene_mas_doctores(&self) -> bool {
        self.displayed().len() < self.filtrados.len()
    }

    pub fn total(&self) -> usize {
        self.filtrados.len()
    }

    /// 列表为空时的提示文案
    pub fn mensaje_info(&self) -> Option<&'static str> {
        if self.doctores.is_empty() {
            Some(MENSAJE_SIN_DOCTORES)
        } else if self.filtrados.is_empty() {
            Some(MENSAJE_SIN_COINCIDENCIAS)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EstadoDoctor;

    fn doctor(id: usize, esp_id: &str, esp_nombre: &str) -> Doctor {
        Doctor {
            id: id.to_string(),
            usuario_id: format!("u{}", id),
            nombre: format!("Nombre{}", id),
            apellido: format!("Apellido{}", id),
            email: format!("d{}@clinica.test", id),
            especialidad: Especialidad::new(esp_id, esp_nombre),
            telefono: String::new(),
            matricula: format!("M{}", id),
            precio_consulta: 0.0,
            estado: EstadoDoctor::Activo,
        }
    }

    #[test]
    fn paginator_caps_at_total() {
        let mut p = Paginator::new(8);
        assert_eq!(p.visible_count(20), 8);
        assert!(p.advance(20));
        assert_eq!(p.visible_count(20), 16);
        assert!(p.advance(20));
        assert_eq!(p.visible_count(20), 20);
        assert!(!p.has_more(20));
        assert!(!p.advance(20));
        assert_eq!(p.pagina_actual(), 2);
    }

    #[test]
    fn huge_page_size_does_not_overflow() {
        let mut p = Paginator::new(usize::MAX);
        assert_eq!(p.visible_count(20), 20);
        assert!(!p.has_more(20));
        assert!(!p.advance(20));

        let mut state = DoctorListState::new(usize::MAX / 2 + 1);
        state.set_doctores((0..3).map(|i| doctor(i, "1", "Clínica")).collect());
        assert_eq!(state.displayed().len(), 3);
        assert!(!state.ver_mas());
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let p = Paginator::new(0);
        assert_eq!(p.page_size(), 1);
    }

    #[test]
    fn groups_sort_by_display_name() {
        let doctores = vec![
            doctor(1, "3", "Pediatría"),
            doctor(2, "1", "Cardiología"),
            doctor(3, "3", "Pediatría"),
        ];
        let grupos = agrupar_por_especialidad(&doctores, &[], 8);

        let nombres: Vec<_> = grupos.iter().map(|g| g.nombre.as_str()).collect();
        assert_eq!(nombres, vec!["Cardiología", "Pediatría"]);
        assert_eq!(grupos[1].doctores.len(), 2);
        assert_eq!(grupos[0].descripcion, DEFAULT_ESPECIALIDAD_DESCRIPCION);
    }

    #[test]
    fn catalog_description_is_used_when_present() {
        let mut cardio = Especialidad::new("1", "Cardiología");
        cardio.descripcion = Some("Corazón y sistema circulatorio".into());
        let grupos = agrupar_por_especialidad(&[doctor(1, "1", "Cardiología")], &[cardio], 8);
        assert_eq!(grupos[0].descripcion, "Corazón y sistema circulatorio");
    }

    #[test]
    fn collapsed_group_shows_nothing_and_expanding_resets_page() {
        let doctores: Vec<_> = (0..10).map(|i| doctor(i, "1", "Clínica")).collect();
        let mut grupo = agrupar_por_especialidad(&doctores, &[], 8).remove(0);

        assert!(grupo.mostrando_doctores().is_empty());
        grupo.toggle();
        assert_eq!(grupo.mostrando_doctores().len(), 8);
        assert!(grupo.ver_mas_doctores());
        assert_eq!(grupo.total_mostrados(), 10);
        assert!(!grupo.tiene_mas_doctores());

        grupo.toggle();
        grupo.toggle();
        assert_eq!(grupo.mostrando_doctores().len(), 8);
    }

    #[test]
    fn filter_resets_to_first_page() {
        let mut doctores: Vec<_> = (0..20).map(|i| doctor(i, "1", "Clínica")).collect();
        doctores.push(doctor(99, "2", "Neurología"));
        let mut state = DoctorListState::new(8);
        state.set_doctores(doctores);

        state.ver_mas();
        assert_eq!(state.displayed().len(), 16);

        state.set_especialidad("2");
        assert_eq!(state.total(), 1);
        assert_eq!(state.displayed().len(), 1);
        assert!(!state.tiene_mas_doctores());

        state.set_especialidad("");
        state.set_busqueda("apellido1");
        // Apellido1, Apellido10..Apellido19
        assert_eq!(state.total(), 11);
        assert_eq!(state.displayed().len(), 8);
    }

    #[test]
    fn info_messages_distinguish_empty_and_no_match() {
        let mut state = DoctorListState::new(8);
        state.set_doctores(Vec::new());
        assert_eq!(state.mensaje_info(), Some(MENSAJE_SIN_DOCTORES));

        state.set_doctores(vec![doctor(1, "1", "Clínica")]);
        assert_eq!(state.mensaje_info(), None);
        state.set_busqueda("zzz");
        assert_eq!(state.mensaje_info(), Some(MENSAJE_SIN_COINCIDENCIAS));
    }
}
