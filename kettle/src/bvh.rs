use itertools::partition;

use crate::{
    hit::Hit,
    math::{Bounds3, Point3, Ray, Vec3},
    shapes::Triangle,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Primitives_and_Intersection_Acceleration/Bounding_Volume_Hierarchies.html

// 'middle' can peel off one triangle per level on geometrically spaced input.
// Past this depth splits switch to 'equal counts', which halves the range and
// keeps the total tree depth within the traversal stack.
const MAX_MIDDLE_SPLIT_DEPTH: usize = 30;

// MAX_MIDDLE_SPLIT_DEPTH plus log2 of any u32-indexable triangle count
const TRAVERSAL_STACK_SIZE: usize = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SplitMethod {
    Middle,
    EqualCounts,
}

/// A flattened bounding volume hierarchy over a triangle array.
///
/// Leaf nodes index directly into the reordered triangle array returned by
/// [BoundingVolumeHierarchy::new]; queries borrow that array back.
pub struct BoundingVolumeHierarchy {
    nodes: Vec<BvhNode>,
}

impl BoundingVolumeHierarchy {
    /// Creates a new `BoundingVolumeHierarchy` for `triangles`, also returning
    /// them reordered to match leaf ranges.
    ///
    /// An empty input yields an empty hierarchy whose queries report no hits.
    pub fn new(
        triangles: Vec<Triangle>,
        max_tris_in_leaf: usize,
        split_method: SplitMethod,
    ) -> (Self, Vec<Triangle>) {
        assert!(max_tris_in_leaf > 0, "Leaves need room for triangles");

        if triangles.is_empty() {
            return (Self { nodes: Vec::new() }, triangles);
        }

        let mut triangle_info: Vec<BvhPrimitiveInfo> = triangles
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let b = t.world_bound();
                BvhPrimitiveInfo {
                    triangle_index: i,
                    bounds: b,
                    centroid: b.p_min + (b.diagonal() * 0.5),
                }
            })
            .collect();

        let mut ordered_triangles = Vec::with_capacity(triangles.len());
        let end = triangle_info.len();
        let (root, node_count) = recursive_build(
            &triangles,
            &mut triangle_info,
            0,
            end,
            0,
            max_tris_in_leaf,
            split_method,
            &mut ordered_triangles,
        );

        let mut ret = Self {
            nodes: vec![BvhNode::default(); node_count],
        };
        ret.flatten_tree(root, 0);

        (ret, ordered_triangles)
    }

    /// Finds the nearest [Hit] for `ray` in `triangles`, if any.
    pub fn intersect(&self, triangles: &[Triangle], ray: Ray<f32>) -> Option<Hit> {
        let mut hit: Option<Hit> = None;

        self.traverse(ray, |node_ray, first, count| {
            for triangle in &triangles[first..(first + count)] {
                if let Some(new_hit) = triangle.intersect(node_ray) {
                    if hit.map_or(true, |old| new_hit.t < old.t) {
                        node_ray.t_max = new_hit.t;
                        hit = Some(new_hit);
                    }
                }
            }
            false
        });

        hit
    }

    /// Checks if `ray` hits anything in `triangles` within its `t_max`.
    pub fn intersect_any(&self, triangles: &[Triangle], ray: Ray<f32>) -> bool {
        let mut found = false;
        self.traverse(ray, |node_ray, first, count| {
            found = triangles[first..(first + count)]
                .iter()
                .any(|t| t.intersect(node_ray).is_some());
            found
        });
        found
    }

    /// Walks nodes front to back, calling `on_leaf` with each hit leaf range.
    /// Traversal stops early when `on_leaf` returns `true`.
    fn traverse<F>(&self, mut ray: Ray<f32>, mut on_leaf: F)
    where
        F: FnMut(&mut Ray<f32>, usize, usize) -> bool,
    {
        if self.nodes.is_empty() {
            return;
        }

        let inv_dir = Vec3::new(1.0 / ray.d.x, 1.0 / ray.d.y, 1.0 / ray.d.z);
        let dir_is_neg = [inv_dir.x < 0.0, inv_dir.y < 0.0, inv_dir.z < 0.0];

        let mut current_node_index = 0;
        let mut to_visit_index = 0;
        let mut to_visit_stack = [0; TRAVERSAL_STACK_SIZE];
        loop {
            let node = self.nodes[current_node_index];
            if node.bounds.intersect(ray, inv_dir, dir_is_neg) {
                match node.content {
                    NodeContent::Interior {
                        second_child_index,
                        split_axis,
                    } => {
                        // Traverse children front to back
                        if dir_is_neg[split_axis as usize] {
                            to_visit_stack[to_visit_index] = current_node_index + 1;
                            to_visit_index += 1;
                            current_node_index = second_child_index as usize;
                        } else {
                            to_visit_stack[to_visit_index] = second_child_index as usize;
                            to_visit_index += 1;
                            current_node_index += 1;
                        }
                        continue;
                    }
                    NodeContent::Leaf {
                        first_index,
                        count,
                    } => {
                        if on_leaf(&mut ray, first_index as usize, count as usize) {
                            return;
                        }
                    }
                    NodeContent::Uninitialized => unreachable!(),
                }
            }

            if to_visit_index == 0 {
                return;
            }
            to_visit_index -= 1;
            current_node_index = to_visit_stack[to_visit_index];
        }
    }

    fn flatten_tree(&mut self, root: Box<BvhBuildNode>, mut next_index: usize) -> usize {
        match root.content {
            BuildNodeContent::Interior {
                children: [child0, child1],
                split_axis,
            } => {
                let self_index = next_index;
                let second_child_index = self.flatten_tree(child0, self_index + 1);
                next_index = self.flatten_tree(child1, second_child_index);
                self.nodes[self_index] =
                    BvhNode::interior(root.bounds, second_child_index, split_axis);
            }
            BuildNodeContent::Leaf { first_index, count } => {
                self.nodes[next_index] = BvhNode::leaf(root.bounds, first_index, count);
                next_index += 1;
            }
        }
        next_index
    }
}

#[allow(clippy::too_many_arguments)]
fn recursive_build(
    triangles: &[Triangle],
    triangle_info: &mut [BvhPrimitiveInfo],
    start: usize,
    end: usize,
    depth: usize,
    max_tris_in_leaf: usize,
    split_method: SplitMethod,
    ordered_triangles: &mut Vec<Triangle>,
) -> (Box<BvhBuildNode>, usize) {
    let bounds = triangle_info[start..end]
        .iter()
        .fold(Bounds3::default(), |b, t| b.union_b(t.bounds));
    let first_index = ordered_triangles.len();

    let count = end - start;
    macro_rules! init_leaf {
        () => {{
            ordered_triangles.extend(
                triangle_info[start..end]
                    .iter()
                    .map(|t| triangles[t.triangle_index]),
            );
            (BvhBuildNode::leaf(first_index, count, bounds), 1)
        }};
    }

    if count <= max_tris_in_leaf {
        init_leaf!()
    } else {
        let centroid_bounds = triangle_info[start..end]
            .iter()
            .fold(Bounds3::default(), |b, t| b.union_p(t.centroid));
        let axis = centroid_bounds.maximum_extent();

        if centroid_bounds.p_max[axis] == centroid_bounds.p_min[axis] {
            init_leaf!()
        } else {
            let mut mid = start;
            // 'middle' falls back to 'equal counts' on a lopsided or
            // too-deep split
            let split_method = match split_method {
                SplitMethod::Middle if depth >= MAX_MIDDLE_SPLIT_DEPTH => {
                    SplitMethod::EqualCounts
                }
                SplitMethod::Middle => {
                    let mid_value =
                        (centroid_bounds.p_min[axis] + centroid_bounds.p_max[axis]) / 2.0;
                    mid = partition(triangle_info[start..end].iter_mut(), |t| {
                        t.centroid[axis] < mid_value
                    }) + start;

                    if mid != start && mid != end {
                        SplitMethod::Middle
                    } else {
                        SplitMethod::EqualCounts
                    }
                }
                _ => split_method,
            };

            match split_method {
                SplitMethod::Middle => {}
                SplitMethod::EqualCounts => {
                    mid = (start + end) / 2;
                    triangle_info[start..end].select_nth_unstable_by(mid - start, |a, b| {
                        a.centroid[axis]
                            .partial_cmp(&b.centroid[axis])
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });
                }
            }

            assert_ne!(mid, start, "BVH: Split failed");

            let (child0, child0_node_count) = recursive_build(
                triangles,
                triangle_info,
                start,
                mid,
                depth + 1,
                max_tris_in_leaf,
                split_method,
                ordered_triangles,
            );
            let (child1, child1_node_count) = recursive_build(
                triangles,
                triangle_info,
                mid,
                end,
                depth + 1,
                max_tris_in_leaf,
                split_method,
                ordered_triangles,
            );
            (
                BvhBuildNode::interior(axis, child0, child1),
                1 + child0_node_count + child1_node_count,
            )
        }
    }
}

struct BvhPrimitiveInfo {
    triangle_index: usize,
    bounds: Bounds3<f32>,
    centroid: Point3<f32>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum NodeContent {
    Interior {
        second_child_index: u32,
        split_axis: u8,
    },
    Leaf {
        first_index: u32,
        // Coincident centroids collapse into one leaf, so this can cover
        // the whole triangle array
        count: u32,
    },
    Uninitialized,
}

#[derive(Copy, Clone)]
struct BvhNode {
    bounds: Bounds3<f32>,
    content: NodeContent,
}

impl BvhNode {
    fn default() -> Self {
        Self {
            bounds: Bounds3::default(),
            content: NodeContent::Uninitialized,
        }
    }

    fn interior(bounds: Bounds3<f32>, second_child_index: usize, split_axis: usize) -> Self {
        Self {
            bounds,
            content: NodeContent::Interior {
                second_child_index: second_child_index as u32,
                split_axis: split_axis as u8,
            },
        }
    }

    fn leaf(bounds: Bounds3<f32>, first_index: usize, count: usize) -> Self {
        Self {
            bounds,
            content: NodeContent::Leaf {
                first_index: first_index as u32,
                count: count as u32,
            },
        }
    }
}

enum BuildNodeContent {
    Interior {
        children: [Box<BvhBuildNode>; 2],
        split_axis: usize,
    },
    Leaf {
        // Range in the ordered triangle array
        first_index: usize,
        count: usize,
    },
}

struct BvhBuildNode {
    bounds: Bounds3<f32>,
    content: BuildNodeContent,
}

impl BvhBuildNode {
    fn interior(split_axis: usize, child0: Box<BvhBuildNode>, child1: Box<BvhBuildNode>) -> Box<Self> {
        Box::new(Self {
            bounds: child0.bounds.union_b(child1.bounds),
            content: BuildNodeContent::Interior {
                children: [child0, child1],
                split_axis,
            },
        })
    }

    fn leaf(first_index: usize, count: usize, bounds: Bounds3<f32>) -> Box<Self> {
        Box::new(Self {
            bounds,
            content: BuildNodeContent::Leaf { first_index, count },
        })
    }
}
