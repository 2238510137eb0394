//! Mochila 0/1 acotada por créditos.
//!
//! value[i][w] = máximo peso usando los cursos 1..i con créditos <= w.
//! Los valores se guardan en una sola fila (se recorre w de mayor a menor),
//! y la decisión "incluido" de cada celda se registra durante el llenado
//! para que la reconstrucción no compare flotantes.

/// Margen para considerar que incluir mejora estrictamente. Los empates
/// se resuelven excluyendo.
pub const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct KnapsackTable {
    budget: usize,
    costs: Vec<usize>,
    /// Fila final: values[w] = value[n][w].
    values: Vec<f64>,
    /// Plano n × (budget + 1).
    included: Vec<bool>,
}

impl KnapsackTable {
    /// Llena la tabla para `items` = (créditos, peso) en orden de catálogo.
    ///
    /// Un ítem con coste 0 o mayor que el presupuesto nunca se marca como
    /// incluido, pero conserva su índice.
    pub fn fill(items: &[(usize, f64)], budget: usize) -> Self {
        let width = budget + 1;
        let mut values = vec![0.0_f64; width];
        let mut included = vec![false; items.len() * width];

        for (i, &(cost, weight)) in items.iter().enumerate() {
            if cost == 0 || cost > budget {
                continue;
            }
            let row = i * width;
            for w in (cost..=budget).rev() {
                let with = values[w - cost] + weight;
                if with > values[w] + EPSILON {
                    values[w] = with;
                    included[row + w] = true;
                }
            }
        }

        KnapsackTable {
            budget,
            costs: items.iter().map(|(c, _)| *c).collect(),
            values,
            included,
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn cost(&self, i: usize) -> usize {
        self.costs[i]
    }

    /// value[n][W]
    pub fn best_value(&self) -> f64 {
        self.values[self.budget]
    }

    /// value[n][w] para cualquier w <= W.
    pub fn value_at(&self, w: usize) -> Option<f64> {
        self.values.get(w).copied()
    }

    /// ¿Se usó el ítem `i` (base 0) para alcanzar value[i+1][w]?
    pub fn is_included(&self, i: usize, w: usize) -> bool {
        if i >= self.costs.len() || w > self.budget {
            return false;
        }
        self.included[i * (self.budget + 1) + w]
    }
}
